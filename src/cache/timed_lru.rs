//! Timed LRU Cache Module
//!
//! Cache engine combining recency-ordered eviction with store-time expiry.

use std::fmt;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use lru::LruCache;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::cache::{Cache, CacheEntry, CacheStats};
use crate::config::Config;
use crate::error::{CacheError, Result};

/// State guarded by the cache lock.
struct Inner<K, V> {
    /// Entries ordered from most to least recently used, indexed by key
    entries: LruCache<K, CacheEntry<V>>,
    stats: CacheStats,
}

// == Timed LRU Cache ==
/// A bounded cache that evicts by recency and expires by age.
///
/// Two pressures apply independently:
/// - when a new key arrives at capacity, the least recently used entry is
///   dropped, whether or not it has expired;
/// - an entry older than `store_time` is treated as absent and purged by the
///   lookup that finds it.
///
/// There is no background sweep, so expired entries nobody reads stay in
/// memory until capacity pressure or `clear()` removes them.
///
/// A single mutex guards the entries and statistics; every operation holds
/// it for its whole (constant-time) duration.
pub struct TimedLruCache<K, V> {
    inner: Mutex<Inner<K, V>>,
    capacity: NonZeroUsize,
    store_time: Duration,
}

impl<K: Hash + Eq, V> TimedLruCache<K, V> {
    // == Constructor ==
    /// Creates a cache holding at most `capacity` entries, each retrievable
    /// for `store_time` after its last `put`.
    ///
    /// # Errors
    /// `CacheError::InvalidConfig` if `capacity` or `store_time` is zero.
    pub fn new(capacity: usize, store_time: Duration) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or_else(|| {
            CacheError::InvalidConfig("capacity must be greater than zero".to_string())
        })?;

        if store_time.is_zero() {
            return Err(CacheError::InvalidConfig(
                "store time must be greater than zero".to_string(),
            ));
        }

        let store_time_ms = store_time.as_millis() as u64;
        info!(capacity = capacity.get(), store_time_ms, "Timed LRU cache created");

        Ok(Self {
            inner: Mutex::new(Inner {
                entries: LruCache::new(capacity),
                stats: CacheStats::new(),
            }),
            capacity,
            store_time,
        })
    }

    /// Creates a cache sized and timed from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.capacity, config.store_time())
    }

    // == Accessors ==
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn store_time(&self) -> Duration {
        self.store_time
    }

    /// Returns the number of entries held, including expired entries that
    /// no lookup has observed yet.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        let mut stats = inner.stats.clone();
        stats.set_total_entries(inner.entries.len());
        stats
    }
}

impl<K, V> Cache<K, V> for TimedLruCache<K, V>
where
    K: Hash + Eq + Send,
    V: Clone + Send,
{
    // == Put ==
    /// Stores `value` under `key` as the most recently used entry.
    ///
    /// Re-putting an existing key replaces its value and restarts its store
    /// time. A new key arriving at capacity evicts exactly one entry: the
    /// least recently used.
    fn put(&self, key: K, value: V) {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        let is_overwrite = inner.entries.contains(&key);

        // push returns the displaced pair: the old entry on overwrite, the
        // LRU victim otherwise.
        if inner.entries.push(key, CacheEntry::new(value)).is_some() && !is_overwrite {
            inner.stats.record_eviction();
            debug!(
                capacity = self.capacity.get(),
                "Evicted least recently used entry"
            );
        }
    }

    // == Get ==
    /// Returns the value under `key` if present and younger than the store
    /// time, marking it most recently used.
    ///
    /// An expired entry is removed and reported as absent. No other entry is
    /// inspected.
    fn get(&self, key: &K) -> Option<V> {
        let now = Instant::now();
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        let expired = match inner.entries.peek(key) {
            Some(entry) => entry.is_expired_at(now, self.store_time),
            None => {
                inner.stats.record_miss();
                return None;
            }
        };

        if expired {
            inner.entries.pop(key);
            inner.stats.record_expiration();
            let store_time_ms = self.store_time.as_millis() as u64;
            debug!(store_time_ms, "Purged expired entry on lookup");
            return None;
        }

        // get (unlike peek) promotes the entry to most recently used
        let value = inner.entries.get(key).map(|entry| entry.value.clone());
        inner.stats.record_hit();
        value
    }

    // == Clear ==
    /// Removes every entry. Statistics counters are kept.
    fn clear(&self) {
        let mut inner = self.inner.lock();
        let removed = inner.entries.len();
        inner.entries.clear();
        debug!(removed, "Cache cleared");
    }
}

impl<K: Hash + Eq, V> fmt::Debug for TimedLruCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimedLruCache")
            .field("capacity", &self.capacity)
            .field("store_time", &self.store_time)
            .field("len", &self.inner.lock().entries.len())
            .finish()
    }
}
