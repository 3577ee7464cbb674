mod config;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use reelo_site::i18n::{self, Locale, LocaleRegistry, LocalizationProvider};
use reelo_site::page;

fn main() -> Result<()> {
    // Load .env file (ignored in CI)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("reelo_site=info".parse()?),
        )
        .init();

    info!("Starting Reelo site build");

    // Load configuration from environment
    let config = config::Config::from_env()?;
    let initial = Locale::from_code(&config.site_locale)
        .with_context(|| format!("invalid SITE_LOCALE '{}'", config.site_locale))?;

    // Build and install the provider; construction validates the tables
    let provider = LocalizationProvider::new(initial)?;
    i18n::install(provider)?;
    let provider = i18n::current()?;

    let output_dir = Path::new(&config.output_dir);
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output dir {}", output_dir.display()))?;

    // One document per enabled locale; the default locale is index.html
    for locale_config in LocaleRegistry::get().list_enabled() {
        let locale = Locale::from_code(locale_config.code)?;
        provider.set_locale(locale);

        let html = page::render_page(provider);
        let filename = if locale.is_default() {
            "index.html".to_string()
        } else {
            format!("index.{}.html", locale.code())
        };
        let path = output_dir.join(&filename);
        fs::write(&path, &html)
            .with_context(|| format!("failed to write {}", path.display()))?;

        info!(
            locale = locale.code(),
            dir = locale.direction().as_attr(),
            bytes = html.len(),
            "wrote {}",
            path.display()
        );
    }

    // Leave the provider in the configured locale
    provider.set_locale(initial);

    info!("Site build complete");
    Ok(())
}
