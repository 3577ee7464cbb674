//! Localization provider: the single source of truth for the active locale
//! and the translation lookup.
//!
//! The provider is constructed once at startup (construction runs the table
//! completeness self-check) and handed to every rendering consumer as an
//! explicit `&impl LocaleView` parameter. A process-wide slot exists so the
//! binaries can install the provider for the application lifetime; reading
//! that slot before installation is a wiring defect and fails with
//! `I18nError::NotInstalled` rather than silently defaulting.

use std::sync::{OnceLock, RwLock};

use tracing::{debug, info};

use crate::error::I18nError;
use crate::i18n::metrics::LookupMetrics;
use crate::i18n::registry::Direction;
use crate::i18n::validator::TableValidator;
use crate::i18n::{table, Locale};

/// The read-only view of the localization state that rendering consumers
/// depend on. Consumers use `direction` solely to pick the `dir` attribute of
/// their root container and `translate` to resolve every piece of
/// user-visible copy.
pub trait LocaleView {
    /// The currently active locale.
    fn locale(&self) -> Locale;

    /// Resolve a translation key against the active locale's table.
    ///
    /// A key absent from the table comes back unchanged: missing
    /// translations degrade to visibly wrong text, never to a crash.
    fn translate(&self, key: &str) -> String;

    /// The active locale's reading order.
    fn direction(&self) -> Direction {
        self.locale().direction()
    }
}

/// Owner of the active locale selection.
///
/// All reads and writes go through this type; no consumer holds its own copy
/// of the locale state. `set_locale` takes effect for every consumer on its
/// next read.
pub struct LocalizationProvider {
    current: RwLock<Locale>,
}

impl LocalizationProvider {
    /// Create a provider starting in `initial`.
    ///
    /// Runs the table completeness self-check so that key-set divergence
    /// between locales is caught here, at startup, rather than discovered at
    /// render time through the fallback path.
    ///
    /// # Errors
    /// Returns `I18nError::IncompleteTable` or `I18nError::DuplicateKey` if
    /// the shipped tables are inconsistent.
    pub fn new(initial: Locale) -> Result<Self, I18nError> {
        TableValidator::check_completeness()?;
        Ok(Self {
            current: RwLock::new(initial),
        })
    }

    /// The currently active locale. No side effects.
    pub fn locale(&self) -> Locale {
        *self.current.read().expect("locale lock poisoned")
    }

    /// Replace the active locale unconditionally.
    ///
    /// Total and symmetric over the registered locales; idempotent when
    /// called with the current value.
    pub fn set_locale(&self, locale: Locale) {
        let mut current = self.current.write().expect("locale lock poisoned");
        if *current != locale {
            info!(from = current.code(), to = locale.code(), "switching locale");
        }
        *current = locale;
    }

    /// Resolve `key` in the active locale's table, falling back to the key
    /// itself when absent.
    pub fn translate(&self, key: &str) -> String {
        match table::lookup(self.locale(), key) {
            Some(value) => {
                LookupMetrics::global().record_table_hit();
                value.to_string()
            }
            None => {
                LookupMetrics::global().record_fallback();
                debug!(key, locale = self.locale().code(), "missing translation, falling back to key");
                key.to_string()
            }
        }
    }

    /// The active locale's reading order.
    pub fn direction(&self) -> Direction {
        self.locale().direction()
    }
}

impl LocaleView for LocalizationProvider {
    fn locale(&self) -> Locale {
        LocalizationProvider::locale(self)
    }

    fn translate(&self, key: &str) -> String {
        LocalizationProvider::translate(self, key)
    }
}

// Process-wide provider slot, lifecycle = application lifetime.
static PROVIDER: OnceLock<LocalizationProvider> = OnceLock::new();

/// Install `provider` as the process-wide instance.
///
/// # Errors
/// Returns `I18nError::AlreadyInstalled` on a second call.
pub fn install(provider: LocalizationProvider) -> Result<(), I18nError> {
    PROVIDER
        .set(provider)
        .map_err(|_| I18nError::AlreadyInstalled)
}

/// The installed process-wide provider.
///
/// # Errors
/// Returns `I18nError::NotInstalled` when called before `install`; reading
/// localization state without a provider is a programming error that must
/// fail loudly, not silently default.
pub fn current() -> Result<&'static LocalizationProvider, I18nError> {
    PROVIDER.get().ok_or(I18nError::NotInstalled)
}
