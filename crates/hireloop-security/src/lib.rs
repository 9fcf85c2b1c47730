//! # Hireloop Security
//!
//! Turns bearer tokens into a [`Caller`](hireloop_core::Caller). Tokens are
//! HS256 JWTs whose `sub` claim is the external auth id.

pub mod identity;
pub mod jwt;

pub use identity::*;
pub use jwt::*;
