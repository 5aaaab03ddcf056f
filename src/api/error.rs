//! Error types for the API request layer
//!
//! Distinguishes timeouts from other transport failures so callers can report
//! "the API is slow" separately from "the API is unreachable". All variants
//! flow through the same stale-cache fallback in the client.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when performing an API request
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request exceeded the configured time bound
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// HTTP transport failed (connection refused, DNS, TLS, ...)
    #[error("HTTP request failed: {0}")]
    Network(#[source] reqwest::Error),

    /// Server responded with a non-success status code
    #[error("API error: {status} {reason}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase, empty if unknown
        reason: String,
    },

    /// Response body was not valid JSON for the expected shape
    #[error("failed to parse API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Maps a reqwest error to the right variant
    ///
    /// reqwest reports per-request timeouts through `is_timeout()`; everything
    /// else is a transport failure.
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(timeout)
        } else {
            ApiError::Network(err)
        }
    }

    /// True when the error is a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout(_))
    }
}
