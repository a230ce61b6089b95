use std::{env, num::NonZeroUsize};

use ordercache_core::cache::{normalize_capacity, DEFAULT_CACHE_CAPACITY};

/// Default number of raw payloads the ingest queue buffers.
pub const DEFAULT_INGEST_QUEUE_SIZE: usize = 1_024;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of cached orders (default: 1,000)
    pub cache_capacity: NonZeroUsize,
    /// Path to SQLite database file (default: "ordercache.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub sqlite_path: String,
    /// Pending payloads the ingest queue accepts before rejecting (default: 1,024)
    pub ingest_queue_size: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_CAPACITY` - Maximum cached orders (default: 1,000)
    /// - `SQLITE_PATH` - SQLite database path (default: "ordercache.db")
    /// - `INGEST_QUEUE_SIZE` - Ingest queue bound (default: 1,024)
    pub fn from_env() -> Self {
        Self {
            cache_capacity: parse_cache_capacity(env::var("CACHE_CAPACITY").ok().as_deref()),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "ordercache.db".to_string()),
            ingest_queue_size: env::var("INGEST_QUEUE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(DEFAULT_INGEST_QUEUE_SIZE),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            sqlite_path: "ordercache.db".to_string(),
            ingest_queue_size: DEFAULT_INGEST_QUEUE_SIZE,
        }
    }
}

/// Absent, unparsable and non-positive values fall back to the default.
fn parse_cache_capacity(raw: Option<&str>) -> NonZeroUsize {
    let Some(raw) = raw else {
        return DEFAULT_CACHE_CAPACITY;
    };

    match raw.trim().parse::<i64>() {
        Ok(value) => {
            let capacity = normalize_capacity(value);
            if capacity.get() as i64 != value {
                tracing::warn!(
                    configured = value,
                    capacity = capacity.get(),
                    "CACHE_CAPACITY must be positive, using default"
                );
            }
            capacity
        }
        Err(err) => {
            tracing::warn!(
                configured = raw,
                error = %err,
                capacity = DEFAULT_CACHE_CAPACITY.get(),
                "CACHE_CAPACITY is not a number, using default"
            );
            DEFAULT_CACHE_CAPACITY
        }
    }
}
