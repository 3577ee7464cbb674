//! Internationalization (i18n) module for the bilingual site.
//!
//! All locale metadata, translation tables, and lookup infrastructure is
//! contained here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported locales and their
//!   metadata, including each locale's text direction
//! - `locale`: Type-safe `Locale` values validated against the registry
//! - `table` + `en` / `ar`: Static key → string translation tables
//! - `provider`: The `LocalizationProvider` owning the active locale and the
//!   `translate` lookup, plus the `LocaleView` consumer contract
//! - `validator`: Startup completeness check across the locale tables
//! - `metrics`: Lookup observability (table hits vs. key fallbacks)
//!
//! # Example
//!
//! ```rust
//! use reelo_site::i18n::{Locale, LocalizationProvider};
//!
//! let provider = LocalizationProvider::new(Locale::ENGLISH).unwrap();
//! assert_eq!(provider.translate("nav.home"), "Home");
//!
//! provider.set_locale(Locale::ARABIC);
//! assert_eq!(provider.direction().as_attr(), "rtl");
//! ```

mod ar;
mod en;
mod locale;
mod metrics;
mod provider;
mod registry;
pub mod table;
mod validator;

pub use locale::Locale;
pub use metrics::{LookupMetrics, MetricsReport};
pub use provider::{current, install, LocaleView, LocalizationProvider};
pub use registry::{Direction, LocaleConfig, LocaleRegistry};
pub use validator::{TableValidator, ValidationReport};
