//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

// == Cache Entry ==
/// A stored value plus the absolute instant it expires at.
///
/// Entries are built once per `add` and never mutated afterwards; replacing
/// a key always installs a fresh entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Expiration timestamp (Unix milliseconds)
    pub expire_at: i64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_seconds` after `now_ms`.
    ///
    /// A zero or negative TTL produces an entry that is already expired.
    pub fn new(value: V, now_ms: i64, ttl_seconds: i64) -> Self {
        Self {
            value,
            expire_at: now_ms.saturating_add(ttl_seconds.saturating_mul(1000)),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches `expire_at`.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.expire_at <= now_ms
    }

    // == Expires In ==
    /// Milliseconds left before expiry; negative once the entry is stale.
    pub fn expires_in(&self, now_ms: i64) -> i64 {
        self.expire_at - now_ms
    }
}
