//! Dependency injection using Shaku.
//!
//! The MySQL deployment is assembled from shaku modules, one per cache
//! backend. The in-memory deployment uses [`ServiceSet`]'s plain builder.

use hireloop_config::{AppConfig, RedisConfig, StoreConfig};
use hireloop_core::{HireloopError, HireloopResult};
use hireloop_repository::{
    DatabasePool, DatabasePoolInterface, DatabasePoolParameters, MySqlCommentRepository,
    MySqlInterviewRepository, MySqlUserRepository,
};
use hireloop_service::{
    r#impl::{
        CommentServiceComponent, CommentServiceComponentParameters, DashboardServiceComponent,
        InterviewServiceComponent, InterviewServiceComponentParameters, UserServiceComponent,
        UserServiceComponentParameters,
    },
    CacheInterface, CachePolicy, CommentService, DashboardService, EntryStore, InMemoryCache,
    InMemoryCacheParameters, InterviewService, RedisCacheService, RedisCacheServiceParameters,
    ServiceSet, UserService,
};
use shaku::{module, HasComponent};
use std::sync::Arc;
use tracing::info;

// MySQL store with the Redis cache.
module! {
    pub MySqlRedisModule {
        components = [
            DatabasePool,
            MySqlInterviewRepository,
            MySqlCommentRepository,
            MySqlUserRepository,
            RedisCacheService,
            InterviewServiceComponent,
            CommentServiceComponent,
            UserServiceComponent,
            DashboardServiceComponent,
        ],
        providers = [],
    }
}

// MySQL store with the in-process cache, for single-instance deployments.
module! {
    pub MySqlLocalCacheModule {
        components = [
            DatabasePool,
            MySqlInterviewRepository,
            MySqlCommentRepository,
            MySqlUserRepository,
            InMemoryCache,
            InterviewServiceComponent,
            CommentServiceComponent,
            UserServiceComponent,
            DashboardServiceComponent,
        ],
        providers = [],
    }
}

/// The wired service graph plus the handles the server shuts down or probes.
pub struct Wiring {
    pub services: ServiceSet,
    pub pool: Option<Arc<dyn DatabasePoolInterface>>,
    pub redis: Option<Arc<RedisCacheService>>,
}

impl std::fmt::Debug for Wiring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wiring")
            .field("mysql", &self.pool.is_some())
            .field("redis", &self.redis.is_some())
            .finish_non_exhaustive()
    }
}

/// Creates the Redis pool when Redis is enabled.
pub fn create_redis_pool(config: &RedisConfig) -> HireloopResult<Option<Arc<deadpool_redis::Pool>>> {
    if !config.enabled {
        return Ok(None);
    }

    let mut redis_cfg = deadpool_redis::Config::from_url(&config.url);
    redis_cfg.pool = Some(deadpool_redis::PoolConfig::new(config.pool_size));
    let pool = redis_cfg
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .map_err(|e| HireloopError::Cache(format!("Failed to create Redis pool: {}", e)))?;

    info!("Redis cache pool created for {}", config.url);
    Ok(Some(Arc::new(pool)))
}

/// Resolves every service out of a module.
pub fn services_from_module<M>(module: &M) -> ServiceSet
where
    M: HasComponent<dyn InterviewService>
        + HasComponent<dyn CommentService>
        + HasComponent<dyn UserService>
        + HasComponent<dyn DashboardService>,
{
    ServiceSet {
        interviews: module.resolve(),
        comments: module.resolve(),
        users: module.resolve(),
        dashboard: module.resolve(),
    }
}

/// Wires the in-memory store, with Redis when enabled.
pub fn build_memory_wiring(config: &AppConfig) -> HireloopResult<Wiring> {
    let policy = CachePolicy::from(&config.cache);

    let (cache, redis): (Arc<dyn CacheInterface>, _) = match create_redis_pool(&config.redis)? {
        Some(pool) => {
            let redis = Arc::new(RedisCacheService::new(pool));
            (redis.clone(), Some(redis))
        }
        None => (
            Arc::new(InMemoryCache::with_capacity(config.cache.max_entries)),
            None,
        ),
    };

    Ok(Wiring {
        services: ServiceSet::in_memory_with_cache(cache, policy),
        pool: None,
        redis,
    })
}

/// Connects MySQL and wires the matching shaku module.
pub async fn build_mysql_wiring(config: &AppConfig) -> HireloopResult<Wiring> {
    let db_pool = connect_store(&config.store).await?;
    let policy = CachePolicy::from(&config.cache);
    let redis_pool = create_redis_pool(&config.redis)?;

    let pool_params = DatabasePoolParameters {
        pool: db_pool.inner().clone(),
    };

    match redis_pool {
        Some(redis_pool) => {
            let module = MySqlRedisModule::builder()
                .with_component_parameters::<DatabasePool>(pool_params)
                .with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters {
                    pool: Some(redis_pool.clone()),
                })
                .with_component_parameters::<InterviewServiceComponent>(
                    InterviewServiceComponentParameters { policy },
                )
                .with_component_parameters::<CommentServiceComponent>(
                    CommentServiceComponentParameters { policy },
                )
                .with_component_parameters::<UserServiceComponent>(UserServiceComponentParameters {
                    policy,
                })
                .build();

            Ok(Wiring {
                services: services_from_module(&module),
                pool: Some(module.resolve()),
                redis: Some(Arc::new(RedisCacheService::new(redis_pool))),
            })
        }
        None => {
            let module = MySqlLocalCacheModule::builder()
                .with_component_parameters::<DatabasePool>(pool_params)
                .with_component_parameters::<InMemoryCache>(InMemoryCacheParameters {
                    entries: EntryStore::new(config.cache.max_entries),
                })
                .with_component_parameters::<InterviewServiceComponent>(
                    InterviewServiceComponentParameters { policy },
                )
                .with_component_parameters::<CommentServiceComponent>(
                    CommentServiceComponentParameters { policy },
                )
                .with_component_parameters::<UserServiceComponent>(UserServiceComponentParameters {
                    policy,
                })
                .build();

            Ok(Wiring {
                services: services_from_module(&module),
                pool: Some(module.resolve()),
                redis: None,
            })
        }
    }
}

async fn connect_store(config: &StoreConfig) -> HireloopResult<DatabasePool> {
    let pool = DatabasePool::connect(config).await?;
    if config.run_migrations {
        pool.run_migrations().await?;
    }
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hireloop_core::Caller;

    #[test]
    fn test_redis_disabled_creates_no_pool() {
        assert!(create_redis_pool(&RedisConfig::default()).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_wiring_serves_requests() {
        let wiring = build_memory_wiring(&AppConfig::default()).unwrap();
        assert!(wiring.pool.is_none());
        assert!(wiring.redis.is_none());

        let mine = wiring
            .services
            .interviews
            .list_mine(&Caller::authenticated("user_1"))
            .await
            .unwrap();
        assert!(mine.is_empty());
    }
}
