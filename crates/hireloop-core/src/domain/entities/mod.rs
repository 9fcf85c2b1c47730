//! Stored records.

mod comment;
mod interview;
mod user;

pub use comment::{Comment, NewComment};
pub use interview::{Interview, NewInterview};
pub use user::{NewUser, User};
