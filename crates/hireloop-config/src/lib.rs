//! # Hireloop Config
//!
//! Configuration management for the Hireloop interview service.
//! Supports layered configuration from files and environment variables.

mod app_config;
mod loader;
mod modes;

pub use app_config::*;
pub use loader::*;
pub use modes::*;
