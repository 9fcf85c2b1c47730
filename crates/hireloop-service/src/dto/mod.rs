//! Data Transfer Objects (DTOs).

mod comment_dto;
mod dashboard_dto;
mod interview_dto;

pub use comment_dto::*;
pub use dashboard_dto::*;
pub use interview_dto::*;
