//! Configuration loader with layered sources.

use crate::{AppConfig, StoreBackend};
use config::{Config, ConfigError, Environment, File};
use hireloop_core::HireloopError;
use std::path::Path;
use tracing::{debug, info, warn};

/// Environment variable prefix; nested keys use `__`, e.g. `HIRELOOP__CACHE__INVALIDATION`.
pub const ENV_PREFIX: &str = "HIRELOOP";

/// Loads configuration from the default location (`./config`).
pub fn load_default_config() -> Result<AppConfig, HireloopError> {
    load_config("./config")
}

/// Loads and validates configuration.
///
/// Sources are layered in order:
/// 1. `{config_dir}/default.toml` - Default values
/// 2. `{config_dir}/{environment}.toml` - Environment-specific overrides
/// 3. `{config_dir}/local.toml` - Untracked local overrides
/// 4. Environment variables with `HIRELOOP__` prefix
pub fn load_config(config_dir: &str) -> Result<AppConfig, HireloopError> {
    if let Err(e) = dotenvy::dotenv() {
        debug!("No .env file found or error loading it: {}", e);
    }

    let environment =
        std::env::var("HIRELOOP_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    info!("Loading configuration for environment: {}", environment);

    let mut builder = Config::builder();

    for name in ["default", environment.as_str(), "local"] {
        let path = format!("{}/{}.toml", config_dir, name);
        if Path::new(&path).exists() {
            debug!("Loading config from: {}", path);
            builder = builder.add_source(File::with_name(&path).required(false));
        }
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    let app_config: AppConfig = builder
        .build()
        .and_then(|config| config.try_deserialize())
        .map_err(config_error_to_hireloop_error)?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Validates a loaded configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), HireloopError> {
    if config.app.is_production() && config.security.jwt_secret == "change-me-in-production" {
        warn!("Using default JWT secret in production! This is a security risk.");
    }

    if config.store.backend == StoreBackend::Mysql && config.store.url.trim().is_empty() {
        return Err(HireloopError::Configuration(
            "store.url is required for the mysql backend".to_string(),
        ));
    }

    if config.cache.ttl_secs == 0 {
        return Err(HireloopError::Configuration(
            "cache.ttl_secs must be greater than zero".to_string(),
        ));
    }

    if config.cache.max_entries == 0 {
        return Err(HireloopError::Configuration(
            "cache.max_entries must be greater than zero".to_string(),
        ));
    }

    if config.redis.enabled && config.redis.url.trim().is_empty() {
        return Err(HireloopError::Configuration(
            "redis.url is required when redis is enabled".to_string(),
        ));
    }

    Ok(())
}

fn config_error_to_hireloop_error(err: ConfigError) -> HireloopError {
    HireloopError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CacheInvalidation;
    use std::fs;

    #[test]
    fn test_loads_default_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[cache]\ninvalidation = \"legacy\"\nttl_secs = 120\n\n[server]\nport = 9100\n",
        )
        .unwrap();

        let config = load_config(&dir.path().to_string_lossy()).unwrap();
        assert_eq!(config.cache.invalidation, CacheInvalidation::Legacy);
        assert_eq!(config.cache.ttl_secs, 120);
        assert_eq!(config.server.port, 9100);
    }

    #[test]
    fn test_local_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[server]\nport = 9100\n").unwrap();
        fs::write(dir.path().join("local.toml"), "[server]\nport = 9200\n").unwrap();

        let config = load_config(&dir.path().to_string_lossy()).unwrap();
        assert_eq!(config.server.port, 9200);
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let mut config = AppConfig::default();
        config.cache.ttl_secs = 0;
        assert!(matches!(validate_config(&config), Err(HireloopError::Configuration(_))));
    }

    #[test]
    fn test_zero_max_entries_rejected() {
        let mut config = AppConfig::default();
        config.cache.max_entries = 0;
        assert!(matches!(validate_config(&config), Err(HireloopError::Configuration(_))));
    }

    #[test]
    fn test_mysql_requires_url() {
        let mut config = AppConfig::default();
        config.store.backend = StoreBackend::Mysql;
        config.store.url = String::new();
        assert!(validate_config(&config).is_err());
        config.store.url = "mysql://localhost/hireloop".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
