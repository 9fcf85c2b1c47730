//! In-memory comment collection.

use crate::traits::CommentRepository;
use async_trait::async_trait;
use hireloop_core::{Comment, HireloopResult, InterviewId};
use parking_lot::RwLock;

/// In-memory `comments` collection.
#[derive(Debug, Default)]
pub struct InMemoryCommentRepository {
    comments: RwLock<Vec<Comment>>,
}

impl InMemoryCommentRepository {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn insert(&self, comment: &Comment) -> HireloopResult<Comment> {
        self.comments.write().push(comment.clone());
        Ok(comment.clone())
    }

    async fn find_by_interview(&self, interview_id: InterviewId) -> HireloopResult<Vec<Comment>> {
        Ok(self
            .comments
            .read()
            .iter()
            .filter(|c| c.interview_id == interview_id)
            .cloned()
            .collect())
    }
}
