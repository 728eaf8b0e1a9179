//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `PHONE_CITY_DATA_DIR` - Directory for favorites, compare-list, cart and
//!   account records (default: `.phone-city`)
//! - `PHONE_CITY_CATALOG_PATH` - JSON dataset to load instead of the bundled one
//! - `PHONE_CITY_BUY_URL` - Link behind the "Купить" button
//!   (default: `https://wa.me/996707379957`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = ".phone-city";

/// Default "Купить" link: the shop's WhatsApp chat.
pub const DEFAULT_BUY_URL: &str = "https://wa.me/996707379957";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Where persisted sets and accounts are written.
    pub data_dir: PathBuf,
    /// External dataset; `None` uses the bundled catalog.
    pub catalog_path: Option<PathBuf>,
    /// Target of the "Купить" button, validated as an absolute http(s) URL.
    pub buy_url: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("PHONE_CITY_DATA_DIR", DEFAULT_DATA_DIR));
        if data_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "PHONE_CITY_DATA_DIR".to_string(),
                "must not be empty".to_string(),
            ));
        }
        let catalog_path = get_optional_env("PHONE_CITY_CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let buy_url = parse_buy_url(&get_env_or_default("PHONE_CITY_BUY_URL", DEFAULT_BUY_URL))
            .map_err(|e| ConfigError::InvalidEnvVar("PHONE_CITY_BUY_URL".to_string(), e))?;

        Ok(Self {
            data_dir,
            catalog_path,
            buy_url,
        })
    }

    /// Defaults with a custom data directory.
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            catalog_path: None,
            buy_url: DEFAULT_BUY_URL.to_string(),
        }
    }
}

/// Parse the "Купить" link; only `http` and `https` are accepted.
fn parse_buy_url(raw: &str) -> Result<String, String> {
    let url = Url::parse(raw.trim()).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(url.into()),
        other => Err(format!("unsupported scheme {other:?}")),
    }
}

fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_buy_url() {
        let config = StorefrontConfig::default();
        assert_eq!(config.buy_url, DEFAULT_BUY_URL);
        assert_eq!(parse_buy_url(DEFAULT_BUY_URL).unwrap(), DEFAULT_BUY_URL);
        assert_eq!(config.data_dir, PathBuf::from(".phone-city"));
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_parse_buy_url() {
        assert!(parse_buy_url("https://t.me/phonecity").is_ok());
        assert!(parse_buy_url("not a url").is_err());
        assert!(parse_buy_url("javascript:alert(1)").is_err());
    }

    #[test]
    fn test_with_data_dir() {
        let config = StorefrontConfig::with_data_dir("/tmp/pc");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/pc"));
    }
}
