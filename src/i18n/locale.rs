//! Locale type: Flexible, validated locale representation.
//!
//! The `Locale` type wraps a locale code that has been validated against the
//! registry, so only supported, enabled locales can be constructed.

use std::fmt;

use crate::error::I18nError;
use crate::i18n::registry::{Direction, LocaleConfig, LocaleRegistry};

/// A validated locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// ISO 639-1 language code (e.g., "en", "ar")
    code: &'static str,
}

impl Locale {
    /// English, the site's default locale.
    pub const ENGLISH: Locale = Locale { code: "en" };

    /// Arabic, the site's right-to-left locale.
    pub const ARABIC: Locale = Locale { code: "ar" };

    /// Create a `Locale` from a language code string.
    ///
    /// # Errors
    /// Returns `I18nError::UnknownLocale` if the code is not in the registry,
    /// or `I18nError::LocaleDisabled` if the locale exists but is disabled.
    pub fn from_code(code: &str) -> Result<Locale, I18nError> {
        let registry = LocaleRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale {
                // Use the static str from the registry
                code: config.code,
            }),
            Some(_) => Err(I18nError::LocaleDisabled(code.to_string())),
            None => Err(I18nError::UnknownLocale(code.to_string())),
        }
    }

    /// Get the default locale (English) from the registry.
    pub fn default_locale() -> Locale {
        let config = LocaleRegistry::get().default_locale();
        Locale { code: config.code }
    }

    /// The ISO 639-1 language code (e.g., "en", "ar").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not found in the registry. This cannot happen
    /// for a `Locale` constructed via `from_code` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    /// The English name of the locale (e.g., "English", "Arabic").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// The native name of the locale (e.g., "English", "العربية").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// The reading order for text rendered in this locale.
    pub fn direction(&self) -> Direction {
        self.config().direction
    }

    /// Whether this is the default locale.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
