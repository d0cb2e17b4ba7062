//! Configuration Module
//!
//! Loads cache and server parameters from environment variables.

use std::env;
use std::time::Duration;

use crate::error::{CacheError, Result};

const DEFAULT_CAPACITY: usize = 1000;
const DEFAULT_STORE_TIME_MS: u64 = 300_000;
const DEFAULT_SERVER_PORT: u16 = 3000;

/// Cache and server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// How long an entry stays retrievable after insertion, in milliseconds
    pub store_time_ms: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `CACHE_STORE_TIME_MS` - Entry store time in milliseconds (default: 300000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    ///
    /// A missing variable falls back to its default. A variable that is set
    /// but unparsable or not positive is an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from any variable source, e.g. a map in tests.
    ///
    /// `lookup` returns the raw value of a variable, `None` when unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let capacity =
            positive_var(&lookup, "CACHE_CAPACITY")?.unwrap_or(DEFAULT_CAPACITY as u64);
        let store_time_ms =
            positive_var(&lookup, "CACHE_STORE_TIME_MS")?.unwrap_or(DEFAULT_STORE_TIME_MS);
        let server_port = match lookup("SERVER_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                CacheError::InvalidConfig(format!("SERVER_PORT is not a valid port: {raw}"))
            })?,
            None => DEFAULT_SERVER_PORT,
        };

        let capacity = usize::try_from(capacity).map_err(|_| {
            CacheError::InvalidConfig(format!("CACHE_CAPACITY is too large: {capacity}"))
        })?;

        Ok(Self {
            capacity,
            store_time_ms,
            server_port,
        })
    }

    /// Returns the configured store time as a Duration.
    pub fn store_time(&self) -> Duration {
        Duration::from_millis(self.store_time_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            store_time_ms: DEFAULT_STORE_TIME_MS,
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

/// Reads a strictly positive integer variable, `None` when unset.
fn positive_var<F>(lookup: &F, name: &str) -> Result<Option<u64>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };

    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| CacheError::InvalidConfig(format!("{name} is not an integer: {raw}")))?;

    if value <= 0 {
        return Err(CacheError::InvalidConfig(format!(
            "{name} must be positive, got {value}"
        )));
    }

    Ok(Some(value as u64))
}
