//! Cache Facade
//!
//! The public cache type. Every operation authenticates before touching the
//! store, and each call runs as a single critical section.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::cache::{AuthGate, CacheStatus, CacheStore, Clock, SystemClock};
use crate::config::DEFAULT_TTL_SECS;
use crate::error::Result;

// == Cache ==
/// Authenticated, capacity-bounded, time-expiring cache.
///
/// # Example
/// ```
/// use dyimport::cache::Cache;
///
/// let cache = Cache::with_capacity("my-secret-token", 100);
/// cache.add("key1", "value1", "my-secret-token", None).unwrap();
/// assert_eq!(cache.get("key1", "my-secret-token").unwrap(), Some("value1"));
/// assert!(cache.delete("key1", "my-secret-token").unwrap());
/// ```
#[derive(Debug)]
pub struct Cache<V> {
    gate: AuthGate,
    store: Mutex<CacheStore<V>>,
    clock: Arc<dyn Clock>,
    default_ttl: i64,
}

impl<V> Cache<V> {
    // == Constructors ==
    /// Creates an unbounded cache guarded by `secret`.
    pub fn new(secret: impl Into<String>) -> Self {
        Self::build(secret.into(), None)
    }

    /// Creates a cache that holds at most `capacity` entries.
    pub fn with_capacity(secret: impl Into<String>, capacity: usize) -> Self {
        Self::build(secret.into(), Some(capacity))
    }

    fn build(secret: String, capacity: Option<usize>) -> Self {
        Self {
            gate: AuthGate::new(secret),
            store: Mutex::new(CacheStore::new(capacity)),
            clock: Arc::new(SystemClock),
            default_ttl: DEFAULT_TTL_SECS,
        }
    }

    /// Replaces the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Sets the TTL used when `add` is called without one.
    pub fn with_default_ttl(mut self, ttl_seconds: i64) -> Self {
        self.default_ttl = ttl_seconds;
        self
    }

    pub fn capacity(&self) -> Option<usize> {
        self.lock().capacity()
    }

    /// Checks `token` against the cache secret without doing anything else.
    pub fn authenticate(&self, token: &str) -> Result<()> {
        self.gate.authenticate(token)
    }

    // == Add ==
    /// Stores `value` under `key` for `ttl_seconds` (default TTL when `None`).
    ///
    /// Fails with `CapacityExceeded` when the cache is full, even if `key` is
    /// already present. A successful add sweeps every expired entry.
    pub fn add(
        &self,
        key: impl Into<String>,
        value: V,
        token: &str,
        ttl_seconds: Option<i64>,
    ) -> Result<()> {
        self.gate.authenticate(token)?;

        let ttl = ttl_seconds.unwrap_or(self.default_ttl);
        let mut store = self.lock();
        let now = self.clock.now_ms();
        store.insert(key.into(), value, now, ttl)
    }

    // == Delete ==
    /// Removes `key`, returning whether an entry was present.
    pub fn delete(&self, key: &str, token: &str) -> Result<bool> {
        self.gate.authenticate(token)?;
        Ok(self.lock().remove(key))
    }

    // == Clear ==
    /// Discards every entry.
    pub fn clear(&self, token: &str) -> Result<()> {
        self.gate.authenticate(token)?;
        self.lock().clear();
        Ok(())
    }

    // The store never holds a half-applied mutation, so a poisoned lock is
    // still safe to use.
    fn lock(&self) -> MutexGuard<'_, CacheStore<V>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V: Clone> Cache<V> {
    // == Get ==
    /// Returns the live value stored under `key`.
    ///
    /// An expired entry is removed as a side effect and reported as `None`.
    pub fn get(&self, key: &str, token: &str) -> Result<Option<V>> {
        self.gate.authenticate(token)?;

        let mut store = self.lock();
        let now = self.clock.now_ms();
        Ok(store.lookup(key, now).cloned())
    }

    // == Status ==
    /// Snapshot of all entries, including expired ones not yet swept.
    pub fn status(&self, token: &str) -> Result<CacheStatus<V>> {
        self.gate.authenticate(token)?;

        let store = self.lock();
        Ok(store.snapshot(self.clock.now_ms()))
    }
}
