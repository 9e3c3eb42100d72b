//! Cache Status Module
//!
//! Read-only diagnostic snapshot of the cache contents.

use serde::Serialize;

use crate::cache::CacheEntry;

// == Status Item ==
/// One entry as seen at snapshot time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusItem<V> {
    pub key: String,
    pub value: V,
    /// Expiration timestamp (Unix milliseconds)
    pub expire_at: i64,
    /// Milliseconds until expiry, negative for entries not yet swept
    pub expires_in: i64,
}

// == Cache Status ==
/// Snapshot of the whole cache.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStatus<V> {
    /// Raw entry count, expired-but-unswept entries included
    pub size: usize,
    /// Entries ordered by key
    pub items: Vec<StatusItem<V>>,
}

impl<V: Clone> CacheStatus<V> {
    /// Builds a snapshot from `(key, entry)` pairs.
    pub fn collect<'a, I>(entries: I, now_ms: i64) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a CacheEntry<V>)>,
        V: 'a,
    {
        let mut items: Vec<StatusItem<V>> = entries
            .into_iter()
            .map(|(key, entry)| StatusItem {
                key: key.clone(),
                value: entry.value.clone(),
                expire_at: entry.expire_at,
                expires_in: entry.expires_in(now_ms),
            })
            .collect();
        items.sort_by(|a, b| a.key.cmp(&b.key));

        Self {
            size: items.len(),
            items,
        }
    }
}

impl<V> CacheStatus<V> {
    /// Returns the item stored under `key`, if any.
    pub fn item(&self, key: &str) -> Option<&StatusItem<V>> {
        self.items.iter().find(|item| item.key == key)
    }

    /// Number of items whose expiry has already passed.
    pub fn expired_count(&self) -> usize {
        self.items.iter().filter(|item| item.expires_in <= 0).count()
    }
}
