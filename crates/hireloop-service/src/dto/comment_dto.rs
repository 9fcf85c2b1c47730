//! Comment DTOs.

use hireloop_core::rules::not_blank;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for adding a comment to an interview.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddCommentRequest {
    #[validate(custom(function = "not_blank"), length(max = 5000))]
    pub content: String,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
}
