//! Comment service trait definition.

use crate::dto::AddCommentRequest;
use async_trait::async_trait;
use hireloop_core::{Caller, Comment, CommentId, HireloopResult, Interface, InterviewId};

/// Cached access to interview comments.
#[async_trait]
pub trait CommentService: Interface + Send + Sync {
    /// Lists the comments of an interview in insertion order.
    async fn list_for_interview(&self, interview_id: InterviewId) -> HireloopResult<Vec<Comment>>;

    /// Adds a comment authored by the caller. Requires an authenticated caller.
    async fn add_comment(
        &self,
        caller: &Caller,
        interview_id: InterviewId,
        request: AddCommentRequest,
    ) -> HireloopResult<CommentId>;
}
