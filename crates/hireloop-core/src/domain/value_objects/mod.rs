//! Value objects.

mod email;
mod interview_status;
mod user_role;

pub use email::{Email, EmailError};
pub use interview_status::{InterviewStatus, UnknownStatus};
pub use user_role::UserRole;
