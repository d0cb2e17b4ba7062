//! Cache Entry Module
//!
//! Defines the value wrapper stored by the timed LRU cache.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A stored value paired with the monotonic instant it was inserted.
///
/// Entries never leave the cache; callers only ever see clones of `value`.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Insertion instant, reset on every `put` of the same key
    pub inserted_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry stamped with the current instant.
    pub fn new(value: V) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns how long ago the entry was inserted, relative to `now`.
    ///
    /// Saturates to zero if `now` is earlier than the insertion instant.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.inserted_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `store_time` at `now`.
    ///
    /// Boundary condition: an entry whose age equals the store time is
    /// already expired.
    pub fn is_expired_at(&self, now: Instant, store_time: Duration) -> bool {
        self.age_at(now) >= store_time
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value");

        assert_eq!(entry.value, "test_value");
        assert!(!entry.is_expired_at(Instant::now(), Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new(42);
        let store_time = Duration::from_millis(50);

        assert!(!entry.is_expired_at(Instant::now(), store_time));

        sleep(Duration::from_millis(100));

        assert!(entry.is_expired_at(Instant::now(), store_time));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new("test");
        let at_boundary = entry.inserted_at + Duration::from_millis(250);

        assert!(
            entry.is_expired_at(at_boundary, Duration::from_millis(250)),
            "Entry should be expired at boundary"
        );
        assert!(!entry.is_expired_at(
            at_boundary - Duration::from_millis(1),
            Duration::from_millis(250)
        ));
    }

    #[test]
    fn test_age_saturates_before_insertion() {
        let entry = CacheEntry::new(());
        let later = entry.inserted_at + Duration::from_secs(5);
        let entry = CacheEntry {
            inserted_at: later,
            ..entry
        };

        assert_eq!(entry.age_at(Instant::now()), Duration::ZERO);
    }
}
