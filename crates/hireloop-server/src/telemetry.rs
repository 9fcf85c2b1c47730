//! Logging and metrics setup.

use hireloop_config::{LogFormat, ObservabilityConfig};
use hireloop_core::{HireloopError, HireloopResult};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber. `RUST_LOG` wins over the config.
pub fn init_logging(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
    }
}

/// Installs the Prometheus recorder when metrics are enabled.
pub fn init_metrics(config: &ObservabilityConfig) -> HireloopResult<Option<PrometheusHandle>> {
    if !config.metrics_enabled {
        return Ok(None);
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| HireloopError::Configuration(format!("Failed to install metrics recorder: {}", e)))?;
    hireloop_service::cache::metrics::register_metrics();
    Ok(Some(handle))
}
