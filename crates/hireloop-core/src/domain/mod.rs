//! Domain entities and value objects of the interview service.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
