//! Integration Tests for the Cache
//!
//! Exercises the public cache API end to end with a manual clock.

use std::sync::Arc;

use dyimport::cache::{Cache, ManualClock};
use dyimport::CacheError;

// == Helper Functions ==

const SECRET: &str = "abc";
const START_MS: i64 = 1_700_000_000_000;

fn create_test_cache(capacity: usize) -> (Cache<String>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(START_MS));
    let cache = Cache::with_capacity(SECRET, capacity).with_clock(clock.clone());
    (cache, clock)
}

fn add(cache: &Cache<String>, key: &str, value: &str, ttl: Option<i64>) -> Result<(), CacheError> {
    cache.add(key, value.to_string(), SECRET, ttl)
}

// == Capacity Scenario ==

#[test]
fn test_capacity_then_expiry_frees_slot() {
    let (cache, clock) = create_test_cache(2);

    add(&cache, "k1", "v1", Some(1)).unwrap();
    add(&cache, "k2", "v2", Some(100)).unwrap();
    assert_eq!(
        add(&cache, "k3", "v3", None),
        Err(CacheError::CapacityExceeded { capacity: 2 })
    );

    clock.advance_ms(1_001);

    assert_eq!(cache.get("k1", SECRET).unwrap(), None);
    assert_eq!(cache.status(SECRET).unwrap().size, 1);

    add(&cache, "k3", "v3", None).unwrap();
    let status = cache.status(SECRET).unwrap();
    assert_eq!(status.size, 2);
    assert!(status.item("k2").is_some());
    assert!(status.item("k3").is_some());
}

#[test]
fn test_rejected_add_keeps_existing_entries() {
    let (cache, _) = create_test_cache(3);
    for i in 0..3 {
        add(&cache, &format!("key{}", i), "value", None).unwrap();
    }

    assert!(add(&cache, "key3", "value", None).is_err());

    for i in 0..3 {
        assert_eq!(
            cache.get(&format!("key{}", i), SECRET).unwrap().as_deref(),
            Some("value")
        );
    }
}

#[test]
fn test_overwrite_on_full_cache_is_rejected() {
    let (cache, _) = create_test_cache(2);
    add(&cache, "k1", "v1", None).unwrap();
    add(&cache, "k2", "v2", None).unwrap();

    assert!(matches!(
        add(&cache, "k1", "replacement", None),
        Err(CacheError::CapacityExceeded { .. })
    ));
    assert_eq!(cache.get("k1", SECRET).unwrap().as_deref(), Some("v1"));
}

#[test]
fn test_overwrite_below_capacity_replaces_entry() {
    let (cache, clock) = create_test_cache(2);
    add(&cache, "k1", "v1", Some(1)).unwrap();

    clock.advance_ms(500);
    add(&cache, "k1", "v2", Some(10)).unwrap();
    clock.advance_ms(1_000);

    assert_eq!(cache.get("k1", SECRET).unwrap().as_deref(), Some("v2"));
    assert_eq!(cache.status(SECRET).unwrap().size, 1);
}

// == Expiry ==

#[test]
fn test_zero_ttl_is_absent() {
    let (cache, _) = create_test_cache(10);
    add(&cache, "k", "v", Some(0)).unwrap();
    assert_eq!(cache.get("k", SECRET).unwrap(), None);
}

#[test]
fn test_status_shows_unswept_entries_until_add() {
    let (cache, clock) = create_test_cache(10);
    add(&cache, "e1", "expired", Some(1)).unwrap();
    add(&cache, "e2", "live", Some(100)).unwrap();

    clock.advance_ms(3_000);

    let before = cache.status(SECRET).unwrap();
    assert_eq!(before.size, 2);
    assert_eq!(before.item("e1").unwrap().expires_in, -2_000);
    assert_eq!(before.item("e2").unwrap().expires_in, 97_000);

    // Status alone never sweeps
    assert_eq!(cache.status(SECRET).unwrap().size, 2);

    add(&cache, "k3", "v3", None).unwrap();

    let after = cache.status(SECRET).unwrap();
    assert_eq!(after.size, 2);
    assert!(after.item("e1").is_none());
    assert!(after.item("e2").is_some());
    assert!(after.item("k3").is_some());
}

#[test]
fn test_status_snapshot_fields() {
    let (cache, clock) = create_test_cache(10);
    add(&cache, "k", "v", Some(60)).unwrap();
    clock.advance_ms(10_000);

    let status = cache.status(SECRET).unwrap();
    let item = status.item("k").unwrap();
    assert_eq!(item.value, "v");
    assert_eq!(item.expire_at, START_MS + 60_000);
    assert_eq!(item.expires_in, 50_000);

    let json = serde_json::to_value(&status).unwrap();
    assert_eq!(json["size"], 1);
    assert_eq!(json["items"][0]["expire_at"], START_MS + 60_000);
}

// == Authentication ==

#[test]
fn test_wrong_token_changes_nothing() {
    let (cache, clock) = create_test_cache(2);
    add(&cache, "k1", "v1", Some(1)).unwrap();
    add(&cache, "k2", "v2", None).unwrap();
    clock.advance_ms(2_000);
    let before = cache.status(SECRET).unwrap();

    assert_eq!(cache.add("k1", "x".to_string(), "bad", None), Err(CacheError::Unauthorized));
    assert_eq!(cache.get("k1", "bad"), Err(CacheError::Unauthorized));
    assert_eq!(cache.delete("k2", "bad"), Err(CacheError::Unauthorized));
    assert_eq!(cache.clear("bad"), Err(CacheError::Unauthorized));
    assert!(matches!(cache.status("bad"), Err(CacheError::Unauthorized)));

    assert_eq!(cache.status(SECRET).unwrap(), before);
}

#[test]
fn test_unauthorized_is_checked_before_capacity() {
    let (cache, _) = create_test_cache(1);
    add(&cache, "k1", "v1", None).unwrap();

    assert_eq!(
        cache.add("k2", "v2".to_string(), "bad", None),
        Err(CacheError::Unauthorized)
    );
}

// == Delete and Clear ==

#[test]
fn test_delete_absent_key_returns_false() {
    let (cache, _) = create_test_cache(2);
    add(&cache, "k1", "v1", None).unwrap();

    assert!(!cache.delete("missing", SECRET).unwrap());
    assert_eq!(cache.status(SECRET).unwrap().size, 1);
}

#[test]
fn test_clear_empties_cache_and_frees_capacity() {
    let (cache, _) = create_test_cache(2);
    add(&cache, "k1", "v1", None).unwrap();
    add(&cache, "k2", "v2", None).unwrap();

    cache.clear(SECRET).unwrap();
    assert_eq!(cache.status(SECRET).unwrap().size, 0);

    add(&cache, "k3", "v3", None).unwrap();
    add(&cache, "k4", "v4", None).unwrap();
}

// == Independent Instances ==

#[test]
fn test_caches_do_not_share_state_or_secrets() {
    let first: Cache<u32> = Cache::new("one");
    let second: Cache<u32> = Cache::new("two");

    first.add("k", 1, "one", None).unwrap();

    assert_eq!(second.get("k", "two").unwrap(), None);
    assert_eq!(second.get("k", "one"), Err(CacheError::Unauthorized));
    assert_eq!(first.get("k", "one").unwrap(), Some(1));
}
