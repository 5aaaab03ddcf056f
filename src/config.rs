//! Environment configuration for the API client
//!
//! Two variables control networking, both optional:
//!
//! - `TERMFOLIO_API_URL` sets the API base URL (default `http://localhost:8000`)
//! - `TERMFOLIO_API_TIMEOUT_MS` sets the request time bound in milliseconds
//!   (default 5000)

use std::time::Duration;
use thiserror::Error;

/// Default API base URL, matching the backend's development address
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

const ENV_API_URL: &str = "TERMFOLIO_API_URL";
const ENV_API_TIMEOUT_MS: &str = "TERMFOLIO_API_TIMEOUT_MS";

/// Errors from reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Timeout variable was set but not a number
    #[error("invalid {name}: '{value}' is not a number of milliseconds")]
    InvalidTimeout {
        /// Name of the offending variable
        name: &'static str,
        /// The value as given
        value: String,
    },
}

/// Networking configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the API server, without a trailing slash
    pub base_url: String,
    /// Per-request time bound
    pub timeout: Duration,
}

impl ApiConfig {
    /// Reads configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through an injected variable lookup
    ///
    /// Lets tests exercise every path without mutating process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(ENV_API_URL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        // Endpoint paths start with a slash, so the base must not end with one
        let base_url = base_url.trim_end_matches('/').to_string();

        let timeout_ms = match lookup(ENV_API_TIMEOUT_MS).filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout {
                    name: ENV_API_TIMEOUT_MS,
                    value: raw,
                })?,
            None => DEFAULT_TIMEOUT_MS,
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = ApiConfig::from_lookup(|_| None).expect("defaults should apply");
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout, Duration::from_millis(5000));
    }

    #[test]
    fn test_custom_base_url() {
        let config = ApiConfig::from_lookup(|name| match name {
            "TERMFOLIO_API_URL" => Some("https://api.example.com".to_string()),
            _ => None,
        })
        .expect("should read url");
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::from_lookup(|name| match name {
            "TERMFOLIO_API_URL" => Some("http://localhost:9000/".to_string()),
            _ => None,
        })
        .expect("should read url");
        assert_eq!(config.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_custom_timeout() {
        let config = ApiConfig::from_lookup(|name| match name {
            "TERMFOLIO_API_TIMEOUT_MS" => Some("250".to_string()),
            _ => None,
        })
        .expect("should read timeout");
        assert_eq!(config.timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_timeout_is_an_error() {
        let result = ApiConfig::from_lookup(|name| match name {
            "TERMFOLIO_API_TIMEOUT_MS" => Some("soon".to_string()),
            _ => None,
        });
        let err = result.expect_err("non-numeric timeout should fail");
        assert!(err.to_string().contains("soon"));
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config = ApiConfig::from_lookup(|_| Some("   ".to_string()))
            .expect("blank values should act unset");
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout, Duration::from_millis(5000));
    }
}
