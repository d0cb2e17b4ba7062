//! Cache Module
//!
//! Provides the cache contract and its bounded, time-expiring LRU implementation.
//!
//! Stored entries are internal to the cache; callers only ever receive values.
//!
//! ```compile_fail
//! use timed_lru_cache::cache::CacheEntry;
//! ```

mod contract;
mod entry;
mod stats;
mod timed_lru;


// Re-export public types
pub use contract::Cache;
pub(crate) use entry::CacheEntry;
pub use stats::CacheStats;
pub use timed_lru::TimedLruCache;
