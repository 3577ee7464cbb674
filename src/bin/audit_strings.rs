//! Audit binary - reviews the translation layer without writing any output
//!
//! Usage:
//!   cargo run --bin audit-strings
//!
//! Prints three reports:
//! - the table validation report (missing/duplicate keys, malformed keys)
//! - every user-facing literal that bypasses the translation lookup
//! - lookup metrics after rendering the page once per enabled locale

use anyhow::Result;
use tracing::info;

use reelo_site::i18n::{Locale, LocaleRegistry, LocalizationProvider, LookupMetrics, TableValidator};
use reelo_site::page;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("reelo_site=info".parse()?),
        )
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    // Table validation
    let report = TableValidator::validate_all();
    println!("--- Translation table validation ---");
    if report.is_clean() {
        println!("clean: every enabled locale is total over the union key set");
    } else {
        for error in &report.errors {
            println!("error:   {error}");
        }
        for warning in &report.warnings {
            println!("warning: {warning}");
        }
    }
    println!();

    // Literal audit
    let literals = page::untranslated_literals();
    println!(
        "--- Untranslated literals ({} flagged for review) ---",
        literals.len()
    );
    for entry in &literals {
        println!("[{}] {}", entry.section, entry.text);
    }
    println!();

    // Exercise every lookup once per enabled locale, then report metrics
    let provider = LocalizationProvider::new(Locale::default_locale())?;
    for locale_config in LocaleRegistry::get().list_enabled() {
        let locale = Locale::from_code(locale_config.code)?;
        provider.set_locale(locale);
        let html = page::render_page(&provider);
        info!(locale = locale.code(), bytes = html.len(), "rendered");
    }

    let metrics = LookupMetrics::global().report();
    println!("--- Lookup metrics ---");
    println!("{}", serde_json::to_string_pretty(&metrics)?);

    if report.has_errors() {
        anyhow::bail!("translation tables have errors; see report above");
    }
    Ok(())
}
