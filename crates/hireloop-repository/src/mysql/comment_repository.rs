//! MySQL comment repository.

use super::parse_uuid;
use crate::{traits::CommentRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hireloop_core::{Comment, CommentId, HireloopError, HireloopResult, InterviewId};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;

/// MySQL-backed `comments` collection.
#[derive(Component, Clone)]
#[shaku(interface = CommentRepository)]
pub struct MySqlCommentRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlCommentRepository {
    /// Creates a new MySQL comment repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: String,
    interview_id: String,
    content: String,
    rating: i32,
    interviewer_id: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = HireloopError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::from(parse_uuid(&row.id)?),
            interview_id: InterviewId::from(parse_uuid(&row.interview_id)?),
            content: row.content,
            rating: row.rating,
            interviewer_id: row.interviewer_id,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CommentRepository for MySqlCommentRepository {
    async fn insert(&self, comment: &Comment) -> HireloopResult<Comment> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, interview_id, content, rating, interviewer_id, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(comment.id.to_string())
        .bind(comment.interview_id.to_string())
        .bind(&comment.content)
        .bind(comment.rating)
        .bind(&comment.interviewer_id)
        .bind(comment.created_at)
        .execute(self.pool.inner())
        .await?;

        Ok(comment.clone())
    }

    async fn find_by_interview(&self, interview_id: InterviewId) -> HireloopResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, interview_id, content, rating, interviewer_id, created_at
            FROM comments
            WHERE interview_id = ?
            ORDER BY seq
            "#,
        )
        .bind(interview_id.to_string())
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}
