//! Catalog configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPGLASS_API_BASE_URL` - Base URL of the catalog service
//!   (e.g., `https://shop.example.com/api`)
//!
//! ## Optional
//! - `SHOPGLASS_API_TOKEN` - Bearer token sent with every request
//! - `SHOPGLASS_REQUEST_TIMEOUT_SECS` - Per-request timeout (default: 10)

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Default per-request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Catalog client configuration.
///
/// Implements `Debug` manually to redact the API token.
#[derive(Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog service; always ends with a slash so
    /// endpoint paths join cleanly.
    pub base_url: Url,
    /// Bearer token for the service, if it requires one.
    pub api_token: Option<SecretString>,
    /// Upper bound for any single request; no operation may stay pending
    /// past it.
    pub request_timeout: Duration,
}

impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("base_url", &self.base_url.as_str())
            .field(
                "api_token",
                &self.api_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = parse_base_url(
            "SHOPGLASS_API_BASE_URL",
            &get_required_env("SHOPGLASS_API_BASE_URL")?,
        )?;
        let api_token = get_optional_env("SHOPGLASS_API_TOKEN").map(SecretString::from);
        let timeout_secs = get_env_or_default(
            "SHOPGLASS_REQUEST_TIMEOUT_SECS",
            &DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("SHOPGLASS_REQUEST_TIMEOUT_SECS".to_string(), e.to_string())
        })?;

        Ok(Self {
            base_url,
            api_token,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Create a configuration programmatically (tests, embedding apps).
    ///
    /// The base URL is normalized to end with a slash.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: with_trailing_slash(base_url),
            api_token: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Set the bearer token.
    #[must_use]
    pub fn with_api_token(mut self, token: SecretString) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse and normalize a base URL from an environment value.
fn parse_base_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("not a usable base URL: {raw}"),
        ));
    }
    Ok(with_trailing_slash(url))
}

/// `Url::join` drops the last path segment unless the base ends with a
/// slash, so normalize here once.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url_adds_trailing_slash() {
        let url = parse_base_url("TEST_VAR", "https://shop.example.com/api").unwrap();
        assert_eq!(url.as_str(), "https://shop.example.com/api/");
    }

    #[test]
    fn test_parse_base_url_keeps_existing_slash() {
        let url = parse_base_url("TEST_VAR", "https://shop.example.com/api/").unwrap();
        assert_eq!(url.as_str(), "https://shop.example.com/api/");
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        let result = parse_base_url("TEST_VAR", "not a url");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_parse_base_url_rejects_cannot_be_a_base() {
        let result = parse_base_url("TEST_VAR", "mailto:ops@example.com");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_new_normalizes_and_defaults() {
        let config = CatalogConfig::new(Url::parse("http://localhost:4000/api").unwrap());
        assert_eq!(config.base_url.as_str(), "http://localhost:4000/api/");
        assert_eq!(
            config.request_timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
        assert!(config.api_token.is_none());
    }

    #[test]
    fn test_builder_methods() {
        let config = CatalogConfig::new(Url::parse("http://localhost:4000/api/").unwrap())
            .with_api_token(SecretString::from("tok-123"))
            .with_request_timeout(Duration::from_secs(3));
        assert!(config.api_token.is_some());
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = CatalogConfig::new(Url::parse("http://localhost:4000/api/").unwrap())
            .with_api_token(SecretString::from("super_secret_token_value"));

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("http://localhost:4000/api/"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_token_value"));
    }
}
