//! Comment record.

use crate::validation::rules::not_blank;
use crate::{CommentId, InterviewId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Feedback an interviewer left on an interview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub interview_id: InterviewId,
    pub content: String,
    pub rating: i32,
    /// Subject of the caller who wrote the comment.
    pub interviewer_id: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Materializes a new comment written by `interviewer_id`.
    #[must_use]
    pub fn create(new: NewComment, interviewer_id: impl Into<String>) -> Self {
        Self {
            id: CommentId::new(),
            interview_id: new.interview_id,
            content: new.content,
            rating: new.rating,
            interviewer_id: interviewer_id.into(),
            created_at: Utc::now(),
        }
    }
}

/// Creation payload for a comment.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub interview_id: InterviewId,
    #[validate(custom(function = "not_blank"), length(max = 5000))]
    pub content: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidateExt;

    #[test]
    fn test_create_records_author() {
        let interview_id = InterviewId::new();
        let comment = Comment::create(
            NewComment {
                interview_id,
                content: "Clear reasoning".to_string(),
                rating: 4,
            },
            "user_interviewer",
        );
        assert_eq!(comment.interview_id, interview_id);
        assert_eq!(comment.interviewer_id, "user_interviewer");
    }

    #[test]
    fn test_rating_bounds() {
        let mut payload = NewComment {
            interview_id: InterviewId::new(),
            content: "ok".to_string(),
            rating: 0,
        };
        assert!(payload.validate_request().is_err());
        payload.rating = 5;
        assert!(payload.validate_request().is_ok());
        payload.rating = 6;
        assert!(payload.validate_request().is_err());
    }
}
