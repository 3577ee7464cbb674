//! Reelo Agency single-page site generator.
//!
//! Renders the bilingual (English/Arabic) marketing site as static HTML, one
//! document per enabled locale. The core of the crate is the localization
//! layer in [`i18n`]: a registry-validated `Locale`, per-locale translation
//! tables, and a `LocalizationProvider` that owns the active locale and the
//! key → string lookup every presentational section consumes.

pub mod config;
pub mod error;
pub mod i18n;
pub mod page;
