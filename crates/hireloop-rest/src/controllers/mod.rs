//! REST API controllers.

pub mod comment_controller;
pub mod dashboard_controller;
pub mod health_controller;
pub mod interview_controller;
pub mod user_controller;

pub use health_controller::*;

use crate::responses::AppError;
use hireloop_core::{HireloopError, InterviewId};

/// Parses an interview id from a path segment.
pub(crate) fn parse_interview_id(id: &str) -> Result<InterviewId, AppError> {
    InterviewId::parse(id)
        .map_err(|_| AppError(HireloopError::Validation(format!("Invalid interview ID: {}", id))))
}
