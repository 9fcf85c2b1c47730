//! Cache interface trait and the read-through helper.

use super::metrics::{record_invalidation, record_lookup, Lookup};
use async_trait::async_trait;
use hireloop_core::HireloopResult;
use serde::{de::DeserializeOwned, Serialize};
use shaku::Interface;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Key/value cache holding JSON strings with a per-entry TTL.
///
/// Values are type-erased to keep the trait dyn-compatible; typed access is
/// provided by [`CacheExt`].
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Get a raw JSON value. `None` if the key is absent or expired.
    async fn get_raw(&self, key: &str) -> HireloopResult<Option<String>>;

    /// Set a raw JSON value with a TTL, replacing any previous value.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> HireloopResult<()>;

    /// Delete a key. Returns `true` if the key existed.
    async fn delete(&self, key: &str) -> HireloopResult<bool>;

    /// Check if a key exists.
    async fn exists(&self, key: &str) -> HireloopResult<bool>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Typed helpers over [`CacheInterface`].
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    async fn get<T: DeserializeOwned + Send>(&self, key: &str) -> HireloopResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> HireloopResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, ttl).await
    }

    /// Cache-aside read.
    ///
    /// A hit is returned verbatim without touching the store. On a miss the
    /// fetch runs and its whole result (record, list, or `None`) is written
    /// back with `ttl`. Cache errors and undecodable entries count as misses;
    /// only the fetch can fail the call.
    async fn read_through<T, F, Fut>(&self, key: &str, ttl: Duration, fetch: F) -> HireloopResult<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = HireloopResult<T>> + Send,
    {
        match self.get_raw(key).await {
            Ok(Some(json)) => match serde_json::from_str::<T>(&json) {
                Ok(value) => {
                    record_lookup(Lookup::Hit);
                    return Ok(value);
                }
                Err(e) => {
                    warn!("Discarding undecodable cache entry '{}': {}", key, e);
                    record_lookup(Lookup::Miss);
                }
            },
            Ok(None) => {
                record_lookup(Lookup::Miss);
            }
            Err(e) => {
                warn!("Cache read failed for '{}', falling back to store: {}", key, e);
                record_lookup(Lookup::Error);
            }
        }

        let value = fetch().await?;

        if let Err(e) = self.set(key, &value, ttl).await {
            warn!("Cache write failed for '{}': {}", key, e);
        }

        Ok(value)
    }

    /// Deletes every key, logging failures instead of returning them.
    async fn invalidate(&self, keys: &[String]) {
        for key in keys {
            match self.delete(key).await {
                Ok(existed) => {
                    debug!("Invalidated '{}' (present: {})", key, existed);
                    record_invalidation();
                }
                Err(e) => warn!("Cache delete failed for '{}': {}", key, e),
            }
        }
    }
}

// Blanket implementation for all CacheInterface implementations
impl<T: CacheInterface + ?Sized> CacheExt for T {}
