//! # Hireloop Repository
//!
//! Access to the three store collections (`interviews`, `comments`, `users`).
//!
//! ```text
//! Service
//!   ↓  Arc<dyn InterviewRepository> / CommentRepository / UserRepository
//! InMemory*Repository   (process-local, insertion ordered)
//! MySql*Repository      (SQLx over DatabasePool)
//! ```
//!
//! Every lookup that can miss returns `Option`; only `update_status` on an
//! unknown id is an error.

pub mod memory;
pub mod mysql;
pub mod pool;
pub mod traits;

pub use memory::*;
pub use mysql::*;
pub use pool::*;
pub use traits::*;
