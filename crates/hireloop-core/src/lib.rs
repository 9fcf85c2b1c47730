//! # Hireloop Core
//!
//! Core types, caller identity, domain entities and error definitions shared by
//! every layer of the Hireloop interview service.

pub mod domain;
pub mod error;
pub mod id;
pub mod identity;
pub mod result;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use identity::*;
pub use result::*;
pub use traits::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
