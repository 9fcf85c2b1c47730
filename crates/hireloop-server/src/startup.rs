//! Server startup utilities.

use hireloop_config::AppConfig;
use tracing::info;

/// Logs where the server can be reached and how it is wired.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let addr = config.server.addr();
    info!("{}", separator);
    info!("REST API:  http://{}/api/v1", addr);
    info!("Health:    http://{}/health", addr);
    info!("API Docs:  http://{}/swagger-ui", addr);
    if config.observability.metrics_enabled {
        info!("Metrics:   http://{}{}", addr, config.observability.metrics_path);
    }
    info!("Store:     {:?}", config.store.backend);
    info!(
        "Cache:     {} (ttl {}s, {:?} invalidation)",
        if config.redis.enabled { "redis" } else { "in-process" },
        config.cache.ttl_secs,
        config.cache.invalidation
    );
    info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_startup_info(&AppConfig::default());
    }
}
