//! Cache Contract Module
//!
//! The capability every cache implementation offers to its callers.

/// A key/value cache.
///
/// A miss is a normal outcome, not an error: `get` returns `None` without
/// saying whether the key was never stored, has expired or was evicted.
/// Implementations own their synchronization, so all methods take `&self`
/// and one instance can be shared behind an `Arc`.
pub trait Cache<K, V>: Send + Sync {
    /// Inserts or replaces the value stored under `key`.
    fn put(&self, key: K, value: V);

    /// Returns a copy of the live value stored under `key`, if any.
    fn get(&self, key: &K) -> Option<V>;

    /// Removes every entry.
    fn clear(&self);

    /// Returns the cached value, or computes, stores and returns it.
    ///
    /// `load` runs without any cache lock held, so two callers missing on the
    /// same key may both compute it; the later `put` wins.
    fn get_or_insert_with<F>(&self, key: K, load: F) -> V
    where
        Self: Sized,
        V: Clone,
        F: FnOnce(&K) -> V,
    {
        if let Some(value) = self.get(&key) {
            return value;
        }

        let value = load(&key);
        self.put(key, value.clone());
        value
    }

    /// Like [`Cache::get_or_insert_with`], for loaders that can fail.
    ///
    /// A failed load stores nothing and hands the error back to the caller.
    fn get_or_try_insert_with<F, E>(&self, key: K, load: F) -> Result<V, E>
    where
        Self: Sized,
        V: Clone,
        F: FnOnce(&K) -> Result<V, E>,
    {
        if let Some(value) = self.get(&key) {
            return Ok(value);
        }

        let value = load(&key)?;
        self.put(key, value.clone());
        Ok(value)
    }
}
