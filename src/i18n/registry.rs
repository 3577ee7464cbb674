//! Locale registry: Single source of truth for all supported locales.
//!
//! This module provides a centralized registry of all locales supported by the
//! site. It uses a singleton pattern with `OnceLock` to ensure thread-safe
//! initialization and access. Text direction is an explicit attribute of each
//! locale's definition rather than being inferred from the locale code, so
//! adding a new locale cannot silently default to the wrong direction.

use std::sync::OnceLock;

/// Reading order applied to a rendered text container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Left-to-right (e.g., English)
    Ltr,
    /// Right-to-left (e.g., Arabic)
    Rtl,
}

impl Direction {
    /// The value used for the HTML `dir` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// Configuration for a supported locale.
///
/// Contains all metadata for a specific locale, including its code, names,
/// text direction, enabled status, and whether it is the default.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language code (e.g., "en", "ar")
    pub code: &'static str,

    /// English name of the locale (e.g., "English", "Arabic")
    pub name: &'static str,

    /// Native name of the locale (e.g., "English", "العربية")
    pub native_name: &'static str,

    /// Reading order for text rendered in this locale
    pub direction: Direction,

    /// Whether this is the default locale at startup (only one should be true)
    pub is_default: bool,

    /// Whether this locale is enabled for rendering
    pub enabled: bool,
}

/// Global locale registry singleton.
///
/// Initialized once on first access and immutable thereafter.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all enabled locales, in registration order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales
            .iter()
            .filter(|locale| locale.enabled)
            .collect()
    }

    /// Get all locales (including disabled ones).
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the default locale configuration.
    ///
    /// # Panics
    /// Panics if no default locale is found or if multiple defaults are
    /// defined (this indicates a configuration error).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a locale code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }
}

/// Default locale configurations.
///
/// The site currently ships English (default, LTR) and Arabic (RTL).
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            direction: Direction::Ltr,
            is_default: true,
            enabled: true,
        },
        LocaleConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            direction: Direction::Rtl,
            is_default: false,
            enabled: true,
        },
    ]
}
