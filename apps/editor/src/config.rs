use anyhow::{Context, Result};

const DEFAULT_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// HTML-to-PDF conversion service. Exports fail when unset.
    pub pdf_renderer_url: Option<String>,
    pub pdf_renderer_timeout_secs: u64,
    /// Share target. Sharing reports "not supported" when unset.
    pub share: Option<ShareConfig>,
    pub max_image_bytes: usize,
}

/// S3-compatible bucket used to publish shared documents.
#[derive(Debug, Clone)]
pub struct ShareConfig {
    pub bucket: String,
    pub s3_endpoint: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let share = match optional_env("SHARE_BUCKET") {
            Some(bucket) => Some(ShareConfig {
                bucket,
                s3_endpoint: require_env("S3_ENDPOINT")?,
                aws_access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
                aws_secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            }),
            None => None,
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            pdf_renderer_url: optional_env("PDF_RENDERER_URL"),
            pdf_renderer_timeout_secs: std::env::var("PDF_RENDERER_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("PDF_RENDERER_TIMEOUT_SECS must be a whole number of seconds")?,
            share,
            max_image_bytes: match optional_env("MAX_IMAGE_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_IMAGE_BYTES must be a byte count")?,
                None => DEFAULT_MAX_IMAGE_BYTES,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            pdf_renderer_url: None,
            pdf_renderer_timeout_secs: 120,
            share: None,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Reads `key`, treating unset and blank the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
