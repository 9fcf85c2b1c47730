//! Process-local cache backend.

use super::CacheInterface;
use async_trait::async_trait;
use hireloop_core::HireloopResult;
use moka::{future::Cache, Expiry};
use shaku::Component;
use std::time::{Duration, Instant};
use tracing::debug;

/// Entry bound applied when no capacity is configured.
pub const DEFAULT_MAX_ENTRIES: u64 = 10_000;

/// A cached payload together with the TTL it was written with.
#[derive(Debug, Clone)]
pub struct CachedValue {
    value: String,
    ttl: Duration,
}

/// Expires each entry after the TTL of its latest write.
struct PerEntryTtl;

impl Expiry<String, CachedValue> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CachedValue,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CachedValue,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Bounded entry store backing [`InMemoryCache`].
#[derive(Debug, Clone)]
pub struct EntryStore(Cache<String, CachedValue>);

impl EntryStore {
    /// Creates a store holding at most `max_entries` entries.
    #[must_use]
    pub fn new(max_entries: u64) -> Self {
        Self(
            Cache::builder()
                .max_capacity(max_entries)
                .expire_after(PerEntryTtl)
                .build(),
        )
    }
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}

/// In-process cache used when Redis is disabled.
///
/// Entries expire after the TTL they were written with, and the least
/// valuable ones are evicted once `max_entries` is reached.
#[derive(Debug, Default, Component)]
#[shaku(interface = CacheInterface)]
pub struct InMemoryCache {
    #[shaku(default)]
    entries: EntryStore,
}

impl InMemoryCache {
    /// Creates an empty cache with the default bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache holding at most `max_entries` entries.
    #[must_use]
    pub fn with_capacity(max_entries: u64) -> Self {
        Self {
            entries: EntryStore::new(max_entries),
        }
    }

    /// Number of stored entries once pending evictions have been applied.
    pub async fn entry_count(&self) -> u64 {
        self.entries.0.run_pending_tasks().await;
        self.entries.0.entry_count()
    }
}

#[async_trait]
impl CacheInterface for InMemoryCache {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn get_raw(&self, key: &str) -> HireloopResult<Option<String>> {
        let value = self.entries.0.get(key).await.map(|cached| cached.value);

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }
        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> HireloopResult<()> {
        self.entries
            .0
            .insert(
                key.to_string(),
                CachedValue {
                    value: value.to_string(),
                    ttl,
                },
            )
            .await;
        debug!("Cached key '{}' with TTL {}s", key, ttl.as_secs());
        Ok(())
    }

    async fn delete(&self, key: &str) -> HireloopResult<bool> {
        Ok(self.entries.0.remove(key).await.is_some())
    }

    async fn exists(&self, key: &str) -> HireloopResult<bool> {
        Ok(self.entries.0.contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_entry_expires_after_ttl() {
        let cache = InMemoryCache::new();
        cache.set_raw("k", "\"v\"", Duration::from_millis(100)).await.unwrap();
        assert_eq!(cache.get_raw("k").await.unwrap().as_deref(), Some("\"v\""));
        assert!(cache.exists("k").await.unwrap());

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert!(cache.get_raw("k").await.unwrap().is_none());
        assert!(!cache.exists("k").await.unwrap());
    }

    #[tokio::test]
    async fn test_set_replaces_and_delete_reports_presence() {
        let cache = InMemoryCache::new();
        cache.set_raw("k", "1", Duration::from_secs(60)).await.unwrap();
        cache.set_raw("k", "2", Duration::from_secs(60)).await.unwrap();
        assert_eq!(cache.get_raw("k").await.unwrap().as_deref(), Some("2"));
        assert_eq!(cache.entry_count().await, 1);

        assert!(cache.delete("k").await.unwrap());
        assert!(!cache.delete("k").await.unwrap());
    }

    #[tokio::test]
    async fn test_expired_entries_are_dropped_without_being_read() {
        let cache = InMemoryCache::new();
        for i in 0..1_000 {
            let key = format!("interview:streamCallId:{i}");
            cache.set_raw(&key, "null", Duration::from_millis(100)).await.unwrap();
        }

        tokio::time::sleep(Duration::from_millis(2_500)).await;
        cache
            .set_raw("interview:streamCallId:live", "null", Duration::from_secs(3600))
            .await
            .unwrap();

        assert_eq!(cache.entry_count().await, 1);
    }

    #[tokio::test]
    async fn test_capacity_bounds_unread_keys() {
        let cache = InMemoryCache::with_capacity(100);
        for i in 0..2_000 {
            let key = format!("interview:streamCallId:{i}");
            cache.set_raw(&key, "null", Duration::from_secs(3600)).await.unwrap();
        }

        assert!(cache.entry_count().await <= 100);
    }
}
