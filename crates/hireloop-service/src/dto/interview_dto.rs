//! Interview DTOs.

use hireloop_core::InterviewStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for patching an interview's status.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: InterviewStatus,
}

/// Identifier of a newly created record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub id: String,
}

impl CreatedResponse {
    /// Wraps any displayable id.
    #[must_use]
    pub fn new(id: impl ToString) -> Self {
        Self { id: id.to_string() }
    }
}
