//! Timed LRU Cache - a bounded, time-expiring key/value cache
//!
//! Entries are evicted by recency once the cache is full and expire a fixed
//! store time after insertion. Expiry is lazy: an expired entry is purged by
//! the lookup that finds it.
//!
//! ```
//! use std::time::Duration;
//! use timed_lru_cache::{Cache, TimedLruCache};
//!
//! let cache = TimedLruCache::new(2, Duration::from_secs(60)).unwrap();
//! cache.put("GO:0008150", "biological_process");
//! assert_eq!(cache.get(&"GO:0008150"), Some("biological_process"));
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{Cache, CacheStats, TimedLruCache};
pub use config::Config;
pub use error::CacheError;
