//! # Client Configuration
//!
//! The product service base URL is injected into
//! [`ProductClient`](crate::clients::ProductClient) instead of being a global,
//! so tests can point the client at a stub server.
//!
//! Sources, in priority order:
//! 1. An explicit URL (`ClientConfig::new`, or `--base-url` on the command line)
//! 2. The `PRODUCT_API_URL` environment variable (`ClientConfig::from_env`)
//! 3. The default, `http://127.0.0.1:8000`

use thiserror::Error;

/// Environment variable consulted by [`ClientConfig::from_env`].
pub const BASE_URL_ENV: &str = "PRODUCT_API_URL";

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Errors raised while building a [`ClientConfig`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Base URL is empty")]
    EmptyBaseUrl,

    #[error("Base URL must start with http:// or https://: {0}")]
    UnsupportedScheme(String),
}

/// Connection settings for the product service.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Build a config from an explicit base URL. Trailing slashes are trimmed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(trimmed.to_string()));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Read `PRODUCT_API_URL`, falling back to the default when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) => Self::new(url),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Get the API base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
