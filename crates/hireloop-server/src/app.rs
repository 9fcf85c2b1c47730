//! Application assembly: wiring, router and health probes.

use crate::di::{build_memory_wiring, build_mysql_wiring, Wiring};
use axum::{routing::get, Router};
use hireloop_config::{AppConfig, StoreBackend};
use hireloop_core::HireloopResult;
use hireloop_repository::{DatabasePoolInterface, StoreHealthCheck};
use hireloop_rest::{create_router, AppState};
use hireloop_security::TokenProvider;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tracing::info;

/// A fully wired application, ready to serve.
pub struct Application {
    pub router: Router,
    pool: Option<Arc<dyn DatabasePoolInterface>>,
}

impl Application {
    /// Wires the configured deployment and builds the router.
    pub async fn build(config: &AppConfig, metrics: Option<PrometheusHandle>) -> HireloopResult<Self> {
        let wiring = match config.store.backend {
            StoreBackend::Memory => build_memory_wiring(config)?,
            StoreBackend::Mysql => build_mysql_wiring(config).await?,
        };
        info!("Wired {:?}", wiring);

        let Wiring {
            services,
            pool,
            redis,
        } = wiring;

        let identity = Arc::new(TokenProvider::new(Arc::new(config.security.clone())));
        let mut state = AppState::new(services, identity);
        if let Some(pool) = &pool {
            state = state.with_health_check(Arc::new(StoreHealthCheck::new(pool.clone())));
        }
        if let Some(redis) = redis {
            state = state.with_health_check(redis);
        }

        let mut router = create_router(state, &config.server);
        if let Some(handle) = metrics {
            let path = config.observability.metrics_path.clone();
            router = router.route(
                &path,
                get(move || {
                    let handle = handle.clone();
                    async move { handle.render() }
                }),
            );
        }

        Ok(Self { router, pool })
    }

    /// Releases store connections.
    pub async fn shutdown(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("mysql", &self.pool.is_some())
            .finish_non_exhaustive()
    }
}
