use anyhow::Result;

/// Build configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Locale the installed provider starts in
    pub site_locale: String,

    /// Directory the rendered documents are written to
    pub output_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            site_locale: std::env::var("SITE_LOCALE").unwrap_or_else(|_| "en".to_string()),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or_else(|_| "dist".to_string()),
        })
    }
}
