//! # Hireloop Server Library
//!
//! Wiring for the two deployments (in-memory store, MySQL store) plus
//! logging, metrics and startup helpers used by the binary.

pub mod app;
pub mod di;
pub mod startup;
pub mod telemetry;
