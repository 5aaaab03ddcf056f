//! In-memory TTL cache for API responses
//!
//! Stores raw JSON response bodies keyed by request identity. Entries stay
//! readable after their TTL lapses (flagged `is_fresh = false`) so the request
//! client can degrade to stale data when the API is unavailable. Entries only
//! leave the table by being overwritten, prefix-invalidated, or cleared.
//!
//! Time is read through the `Clock` trait so tests can expire entries without
//! sleeping.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// How long a cached response is considered fresh
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30);

/// Source of the current time for freshness checks
pub trait Clock: Send + Sync + fmt::Debug {
    /// Returns the current instant
    fn now(&self) -> Instant;
}

/// Production clock backed by `Instant::now`
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Deterministic clock for tests
///
/// Starts at the instant it was created and only moves when `advance` is
/// called, so cache expiry can be driven without real timers.
#[derive(Debug)]
pub struct ManualClock {
    start: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    /// Creates a clock frozen at the current instant
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    /// Moves the clock forward by the given duration
    pub fn advance(&self, by: Duration) {
        let mut offset = self.offset.lock().unwrap_or_else(PoisonError::into_inner);
        *offset += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.start + *self.offset.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A stored response body with its write time
#[derive(Debug)]
struct CacheEntry {
    value: Value,
    stored_at: Instant,
}

/// Result of a cache read, including freshness
#[derive(Debug)]
pub struct CachedValue {
    /// The cached response body
    pub value: Value,
    /// Whether the entry is still within its TTL
    pub is_fresh: bool,
}

/// Keyed table of cached API responses
///
/// Lives for the whole session behind the request client; nothing is ever
/// persisted. Reads never remove entries, so an expired entry remains
/// available as a fallback until a successful request overwrites it or an
/// invalidation removes it.
#[derive(Debug)]
pub struct ResponseCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
    clock: std::sync::Arc<dyn Clock>,
}

impl ResponseCache {
    /// Creates a cache with the default TTL and the system clock
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_CACHE_TTL)
    }

    /// Creates a cache with a custom TTL and the system clock
    pub fn with_ttl(ttl: Duration) -> Self {
        Self::with_clock(ttl, std::sync::Arc::new(SystemClock))
    }

    /// Creates a cache with a custom TTL and clock
    pub fn with_clock(ttl: Duration, clock: std::sync::Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        // Poisoning only means a panic elsewhere mid-insert; the table is
        // still a valid map, so recover the guard.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reads the entry for a key, if any
    ///
    /// Expired entries are returned with `is_fresh = false` rather than
    /// dropped, so failure paths can fall back to them.
    pub fn read(&self, key: &str) -> Option<CachedValue> {
        let entries = self.entries();
        let entry = entries.get(key)?;
        let age = self.clock.now().saturating_duration_since(entry.stored_at);
        Some(CachedValue {
            value: entry.value.clone(),
            is_fresh: age < self.ttl,
        })
    }

    /// Stores a response body for a key, replacing any prior entry
    pub fn write(&self, key: &str, value: Value) {
        let stored_at = self.clock.now();
        self.entries()
            .insert(key.to_string(), CacheEntry { value, stored_at });
    }

    /// Removes every entry whose key starts with the given prefix
    ///
    /// Returns the number of entries removed.
    pub fn invalidate_prefix(&self, prefix: &str) -> usize {
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        before - entries.len()
    }

    /// Removes every entry
    pub fn clear(&self) {
        self.entries().clear();
    }

    /// Number of entries currently stored, fresh or stale
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// True when the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}
