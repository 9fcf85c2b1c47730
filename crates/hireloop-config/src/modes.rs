//! Enumerated configuration switches.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which document store backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local store; contents are lost on restart.
    #[default]
    Memory,
    /// MySQL through a sqlx pool.
    Mysql,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::Mysql => write!(f, "mysql"),
        }
    }
}

/// How mutations invalidate cached reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheInvalidation {
    /// Reproduces the historical behaviour, including its stale keys and the
    /// id-overwrite on comment insert.
    Legacy,
    /// Every mutation deletes exactly the keys whose queries it can affect.
    #[default]
    Scoped,
}

impl CacheInvalidation {
    /// Returns true for the historical behaviour.
    #[must_use]
    pub const fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy)
    }
}

impl fmt::Display for CacheInvalidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Scoped => write!(f, "scoped"),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}
