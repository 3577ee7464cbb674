//! Error types for the localization layer.

use thiserror::Error;

/// Errors raised by the locale registry, translation tables, and provider.
///
/// Missing translations at lookup time are deliberately *not* represented
/// here: `translate` falls back to the raw key instead of failing, so partial
/// content never breaks rendering. Only wiring and authoring defects surface
/// as errors.
#[derive(Error, Debug)]
pub enum I18nError {
    #[error("unknown locale code: '{0}'")]
    UnknownLocale(String),

    #[error("locale '{0}' is not enabled")]
    LocaleDisabled(String),

    #[error("translation table for '{locale}' is missing {count} key(s): {missing:?}", count = missing.len())]
    IncompleteTable {
        locale: &'static str,
        missing: Vec<String>,
    },

    #[error("duplicate translation key '{key}' in table for '{locale}'")]
    DuplicateKey {
        locale: &'static str,
        key: String,
    },

    #[error("localization provider read before installation; install a provider at startup first")]
    NotInstalled,

    #[error("localization provider already installed")]
    AlreadyInstalled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_table_message_names_locale_and_keys() {
        let err = I18nError::IncompleteTable {
            locale: "ar",
            missing: vec!["hero.title".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'ar'"));
        assert!(msg.contains("hero.title"));
        assert!(msg.contains("1 key(s)"));
    }

    #[test]
    fn test_not_installed_message_mentions_startup() {
        let msg = I18nError::NotInstalled.to_string();
        assert!(msg.contains("before installation"));
    }
}
