//! Cache Store Module
//!
//! Key/entry storage with a hard capacity bound and reactive expiry sweeps.
//! The store performs no authentication and reads no clock; the facade
//! supplies both.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStatus};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Raw cache storage.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-entry storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Maximum number of entries allowed, None = unbounded
    capacity: Option<usize>,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries, `None` for no bound
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
        }
    }

    // == Insert ==
    /// Stores a value under `key`, then sweeps expired entries.
    ///
    /// The capacity check runs first and does not look at `key`: once the
    /// store is full, overwriting an existing key is rejected as well.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `now_ms` - Current time in Unix milliseconds
    /// * `ttl_seconds` - Lifetime of the entry, may be zero or negative
    pub fn insert(&mut self, key: String, value: V, now_ms: i64, ttl_seconds: i64) -> Result<()> {
        if let Some(capacity) = self.capacity {
            if self.entries.len() >= capacity {
                return Err(CacheError::CapacityExceeded { capacity });
            }
        }

        let entry = CacheEntry::new(value, now_ms, ttl_seconds);
        self.entries.insert(key, entry);

        self.sweep(now_ms);
        Ok(())
    }

    // == Lookup ==
    /// Returns a reference to a live value, dropping the entry if it expired.
    pub fn lookup(&mut self, key: &str, now_ms: i64) -> Option<&V> {
        let expired = self.entries.get(key)?.is_expired(now_ms);
        if expired {
            self.entries.remove(key);
            debug!("Lazily removed expired entry '{}'", key);
            return None;
        }

        self.entries.get(key).map(|entry| &entry.value)
    }

    // == Remove ==
    /// Removes an entry by key, reporting whether one was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries = HashMap::new();
    }

    // == Sweep ==
    /// Removes all entries whose expiry instant has passed.
    ///
    /// Returns the number of entries removed.
    pub fn sweep(&mut self, now_ms: i64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now_ms));
        let removed = before - self.entries.len();

        if removed > 0 {
            debug!("Sweep removed {} expired entries", removed);
        }
        removed
    }

    // == Length ==
    /// Returns the raw entry count, expired-but-unswept entries included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}

impl<V: Clone> CacheStore<V> {
    // == Snapshot ==
    /// Builds a status snapshot without touching any entry.
    pub fn snapshot(&self, now_ms: i64) -> CacheStatus<V> {
        CacheStatus::collect(self.entries.iter(), now_ms)
    }
}
