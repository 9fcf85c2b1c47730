//! Repository trait definitions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hireloop_core::{
    Comment, HireloopResult, Interface, Interview, InterviewId, InterviewStatus, User,
};

/// Access to the `interviews` collection.
#[async_trait]
pub trait InterviewRepository: Interface + Send + Sync {
    /// Inserts a new interview.
    async fn insert(&self, interview: &Interview) -> HireloopResult<Interview>;

    /// Returns every interview in insertion order.
    async fn find_all(&self) -> HireloopResult<Vec<Interview>>;

    /// Returns the interviews of a candidate (`by_candidate_id` index).
    async fn find_by_candidate(&self, candidate_id: &str) -> HireloopResult<Vec<Interview>>;

    /// Returns the first interview bound to a call (`by_stream_call_id` index).
    async fn find_by_stream_call_id(&self, stream_call_id: &str) -> HireloopResult<Option<Interview>>;

    /// Finds an interview by id.
    async fn find_by_id(&self, id: InterviewId) -> HireloopResult<Option<Interview>>;

    /// Patches the status, stamping `end_time = now` when the status is `completed`.
    ///
    /// Returns the patched record, or `NotFound` if the id is unknown.
    async fn update_status(
        &self,
        id: InterviewId,
        status: InterviewStatus,
        now: DateTime<Utc>,
    ) -> HireloopResult<Interview>;
}

/// Access to the `comments` collection.
#[async_trait]
pub trait CommentRepository: Interface + Send + Sync {
    /// Inserts a new comment.
    async fn insert(&self, comment: &Comment) -> HireloopResult<Comment>;

    /// Returns the comments of an interview in insertion order (`by_interview_id` index).
    async fn find_by_interview(&self, interview_id: InterviewId) -> HireloopResult<Vec<Comment>>;
}

/// Access to the `users` collection.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Inserts a new user.
    async fn insert(&self, user: &User) -> HireloopResult<User>;

    /// Returns every user in insertion order.
    async fn find_all(&self) -> HireloopResult<Vec<User>>;

    /// Finds a user by external auth id (`by_clerk_id` index).
    async fn find_by_clerk_id(&self, clerk_id: &str) -> HireloopResult<Option<User>>;
}
