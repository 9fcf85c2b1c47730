//! Result type aliases for Hireloop.

use crate::HireloopError;

/// A specialized `Result` type for Hireloop operations.
pub type HireloopResult<T> = Result<T, HireloopError>;
