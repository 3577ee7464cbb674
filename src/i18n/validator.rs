//! Translation table validation module.
//!
//! Every key present in one locale's table must be present in every other
//! locale's table. The tables are static data consistent only by authoring
//! discipline, so this module checks them once at startup instead of letting
//! gaps surface at render time through the fallback path.

use std::collections::{BTreeSet, HashSet};
use std::sync::OnceLock;

use regex::Regex;

use crate::error::I18nError;
use crate::i18n::registry::LocaleRegistry;
use crate::i18n::{table, Locale};

/// A locale code paired with its raw table entries.
type LocaleTable = (&'static str, &'static [(&'static str, &'static str)]);

/// Validation report containing errors and warnings about the tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Authoring defects that must block startup (missing or duplicate keys)
    pub errors: Vec<String>,

    /// Non-blocking issues (malformed key names, empty values)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation table consistency.
pub struct TableValidator;

// Keys are lowercase dot-namespaced identifiers, e.g. "hero.cta1"
static KEY_REGEX: OnceLock<Regex> = OnceLock::new();

fn key_regex() -> &'static Regex {
    KEY_REGEX.get_or_init(|| Regex::new(r"^[a-z][a-z0-9_]*(\.[a-z][a-z0-9_]*)+$").unwrap())
}

/// The shipped tables, one per enabled locale in registration order.
fn shipped_tables() -> Vec<LocaleTable> {
    LocaleRegistry::get()
        .list_enabled()
        .iter()
        .map(|config| {
            // Registry and tables are static data kept in lockstep
            let locale = Locale::from_code(config.code).expect("enabled locale should be valid");
            (config.code, table::entries(locale))
        })
        .collect()
}

impl TableValidator {
    /// Verify that every enabled locale's table is total over the union key
    /// set and free of duplicate keys.
    ///
    /// This is the startup self-check run by `LocalizationProvider::new`.
    ///
    /// # Errors
    /// Returns `I18nError::IncompleteTable` naming the first locale with a
    /// gap, or `I18nError::DuplicateKey` for a repeated entry.
    pub fn check_completeness() -> Result<(), I18nError> {
        Self::check_tables(&shipped_tables())
    }

    /// Run the completeness check over an arbitrary set of locale tables.
    ///
    /// # Errors
    /// Returns `I18nError::IncompleteTable` naming the first locale with a
    /// gap, or `I18nError::DuplicateKey` for a repeated entry.
    pub fn check_tables(tables: &[LocaleTable]) -> Result<(), I18nError> {
        let union = union_of(tables);

        for &(code, entries) in tables {
            let mut seen = HashSet::new();
            for (key, _) in entries {
                if !seen.insert(*key) {
                    return Err(I18nError::DuplicateKey {
                        locale: code,
                        key: (*key).to_string(),
                    });
                }
            }

            let missing: Vec<String> = union
                .iter()
                .filter(|key| !seen.contains(**key))
                .map(|key| (*key).to_string())
                .collect();
            if !missing.is_empty() {
                return Err(I18nError::IncompleteTable {
                    locale: code,
                    missing,
                });
            }
        }

        Ok(())
    }

    /// Produce a full report over every enabled locale's table.
    ///
    /// Unlike `check_completeness` this does not stop at the first defect; it
    /// is what the audit binary prints for review.
    pub fn validate_all() -> ValidationReport {
        Self::validate_tables(&shipped_tables())
    }

    /// Produce a full report over an arbitrary set of locale tables.
    pub fn validate_tables(tables: &[LocaleTable]) -> ValidationReport {
        let mut report = ValidationReport::new();
        let union = union_of(tables);

        for &(code, entries) in tables {
            let mut seen = HashSet::new();
            for (key, value) in entries {
                if !seen.insert(*key) {
                    report
                        .errors
                        .push(format!("[{code}] duplicate key '{key}'"));
                }
                if !key_regex().is_match(key) {
                    report
                        .warnings
                        .push(format!("[{code}] malformed key '{key}'"));
                }
                if value.is_empty() {
                    report
                        .warnings
                        .push(format!("[{code}] empty value for key '{key}'"));
                }
            }

            for key in &union {
                if !seen.contains(*key) {
                    report.errors.push(format!("[{code}] missing key '{key}'"));
                }
            }
        }

        report
    }
}

/// The union of keys across the given tables.
fn union_of(tables: &[LocaleTable]) -> BTreeSet<&'static str> {
    tables
        .iter()
        .flat_map(|(_, entries)| entries.iter().map(|(key, _)| *key))
        .collect()
}
