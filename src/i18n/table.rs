//! Translation table access.
//!
//! Each locale ships one complete table of dot-namespaced key → display
//! string entries, declared as static slices in `en.rs` / `ar.rs`. Lookup is
//! exact-match and case-sensitive over a lazily built hash map, so a
//! `translate` call is a single O(1) keyed access with no traversal, partial
//! matching, or key normalization.

use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

use crate::i18n::registry::LocaleRegistry;
use crate::i18n::{ar, en, Locale};

static EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
static AR_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

/// The raw entry slice backing a locale's table.
///
/// # Panics
/// Panics if a locale is registered without a table. The completeness check
/// run at provider construction makes this unreachable in normal operation.
pub fn entries(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale.code() {
        "en" => en::ENTRIES,
        "ar" => ar::ENTRIES,
        other => panic!("no translation table registered for locale '{other}'"),
    }
}

fn map_for(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    let cell = match locale.code() {
        "en" => &EN_MAP,
        "ar" => &AR_MAP,
        other => panic!("no translation table registered for locale '{other}'"),
    };
    cell.get_or_init(|| entries(locale).iter().copied().collect())
}

/// Look up `key` in the table for `locale`. Exact match only.
pub fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    map_for(locale).get(key).copied()
}

/// All keys present in `locale`'s table.
pub fn keys(locale: Locale) -> BTreeSet<&'static str> {
    entries(locale).iter().map(|(key, _)| *key).collect()
}

/// The union of keys across every enabled locale's table.
///
/// On consistent tables this equals each individual key set; the validator
/// uses the union to report exactly which table dropped which key.
pub fn union_of_keys() -> BTreeSet<&'static str> {
    let mut union = BTreeSet::new();
    for config in LocaleRegistry::get().list_enabled() {
        // Registry and tables are static data kept in lockstep
        let locale = Locale::from_code(config.code).expect("enabled locale should be valid");
        union.extend(keys(locale));
    }
    union
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Lookup Tests ====================

    #[test]
    fn test_lookup_english_nav_home() {
        assert_eq!(lookup(Locale::ENGLISH, "nav.home"), Some("Home"));
    }

    #[test]
    fn test_lookup_arabic_nav_home() {
        assert_eq!(lookup(Locale::ARABIC, "nav.home"), Some("الرئيسية"));
    }

    #[test]
    fn test_lookup_absent_key() {
        assert_eq!(lookup(Locale::ENGLISH, "nav.nonexistent"), None);
        assert_eq!(lookup(Locale::ARABIC, "nav.nonexistent"), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(lookup(Locale::ENGLISH, "NAV.HOME"), None);
        assert_eq!(lookup(Locale::ENGLISH, "Nav.Home"), None);
    }

    #[test]
    fn test_lookup_no_partial_matching() {
        assert_eq!(lookup(Locale::ENGLISH, "nav"), None);
        assert_eq!(lookup(Locale::ENGLISH, "nav.home.extra"), None);
        assert_eq!(lookup(Locale::ENGLISH, " nav.home"), None);
    }

    #[test]
    fn test_lookup_matches_entry_slice() {
        for (key, value) in entries(Locale::ENGLISH) {
            assert_eq!(lookup(Locale::ENGLISH, key), Some(*value));
        }
        for (key, value) in entries(Locale::ARABIC) {
            assert_eq!(lookup(Locale::ARABIC, key), Some(*value));
        }
    }

    // ==================== Key Set Tests ====================

    #[test]
    fn test_key_sets_are_identical_across_locales() {
        assert_eq!(keys(Locale::ENGLISH), keys(Locale::ARABIC));
    }

    #[test]
    fn test_union_equals_english_key_set() {
        assert_eq!(union_of_keys(), keys(Locale::ENGLISH));
    }

    #[test]
    fn test_tables_cover_every_section_namespace() {
        let keys = keys(Locale::ENGLISH);
        for namespace in [
            "nav.", "hero.", "about.", "services.", "portfolio.", "team.", "clients.", "contact.",
            "why.",
        ] {
            assert!(
                keys.iter().any(|key| key.starts_with(namespace)),
                "no keys under namespace {namespace}"
            );
        }
    }

    #[test]
    fn test_no_duplicate_keys_within_a_table() {
        for locale in [Locale::ENGLISH, Locale::ARABIC] {
            assert_eq!(entries(locale).len(), keys(locale).len());
        }
    }
}
