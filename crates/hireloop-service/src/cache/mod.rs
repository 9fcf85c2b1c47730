//! Response cache for the access layer.
//!
//! Reads go through [`CacheExt::read_through`]; mutations compute their key
//! sets through [`CachePolicy`] and hand them to [`CacheExt::invalidate`].
//! Backend failures never surface to callers: a failed read is a miss, a
//! failed write or delete is logged.

mod cache_interface;
pub mod cache_keys;
mod memory_cache;
pub mod metrics;
mod policy;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use memory_cache::{
    CachedValue, EntryStore, InMemoryCache, InMemoryCacheParameters, DEFAULT_MAX_ENTRIES,
};
pub use policy::{CachePolicy, CommentCacheWrite, DEFAULT_TTL};
pub use redis_cache::{RedisCacheService, RedisCacheServiceParameters};
