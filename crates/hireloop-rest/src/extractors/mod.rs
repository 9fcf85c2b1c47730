//! Custom Axum extractors.

mod caller;
mod json;

pub use caller::*;
pub use json::*;
