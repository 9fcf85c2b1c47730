//! # Hireloop REST
//!
//! HTTP surface for the access layer. Every route resolves the caller from an
//! optional bearer token; the services decide which operations need one.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
