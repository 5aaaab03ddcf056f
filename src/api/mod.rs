//! HTTP API layer: cache-enabled request client for the portfolio backend
//!
//! This module provides the request client used by every data fetch in the
//! application. Read responses are memoized in an in-memory TTL cache, and
//! request failures degrade to previously cached responses (even expired ones)
//! before surfacing an error.

mod cache;
mod client;
mod error;

pub use cache::{CachedValue, Clock, ManualClock, ResponseCache, SystemClock, DEFAULT_CACHE_TTL};
pub use client::{ApiClient, ContactMessage, RequestKind, RequestOptions};
pub use error::ApiError;
