//! MySQL store backend.

mod comment_repository;
mod interview_repository;
mod user_repository;

pub use comment_repository::MySqlCommentRepository;
pub use interview_repository::MySqlInterviewRepository;
pub use user_repository::MySqlUserRepository;

use hireloop_core::HireloopError;

fn parse_uuid(raw: &str) -> Result<uuid::Uuid, HireloopError> {
    uuid::Uuid::parse_str(raw)
        .map_err(|e| HireloopError::Internal(format!("Invalid UUID in database: {}", e)))
}
