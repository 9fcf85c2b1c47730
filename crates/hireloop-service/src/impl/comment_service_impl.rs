//! Comment service implementation.

use crate::cache::{cache_keys, CacheExt, CacheInterface, CachePolicy, CommentCacheWrite};
use crate::comment_service::CommentService;
use crate::dto::AddCommentRequest;
use async_trait::async_trait;
use hireloop_core::{
    Caller, Comment, CommentId, HireloopResult, InterviewId, NewComment, ValidateExt,
};
use hireloop_repository::CommentRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{info, warn};

/// Comment service backed by the `comments` collection and the response cache.
#[derive(Component)]
#[shaku(interface = CommentService)]
pub struct CommentServiceComponent {
    #[shaku(inject)]
    comments: Arc<dyn CommentRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    policy: CachePolicy,
}

impl CommentServiceComponent {
    /// Creates the service outside of a shaku module.
    #[must_use]
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        cache: Arc<dyn CacheInterface>,
        policy: CachePolicy,
    ) -> Self {
        Self {
            comments,
            cache,
            policy,
        }
    }
}

#[async_trait]
impl CommentService for CommentServiceComponent {
    async fn list_for_interview(&self, interview_id: InterviewId) -> HireloopResult<Vec<Comment>> {
        let key = cache_keys::comments_by_interview(interview_id);

        self.cache
            .read_through(&key, self.policy.ttl(), || {
                self.comments.find_by_interview(interview_id)
            })
            .await
    }

    async fn add_comment(
        &self,
        caller: &Caller,
        interview_id: InterviewId,
        request: AddCommentRequest,
    ) -> HireloopResult<CommentId> {
        let subject = caller.require()?;
        request.validate_request()?;

        let comment = Comment::create(
            NewComment {
                interview_id,
                content: request.content,
                rating: request.rating,
            },
            subject.as_str(),
        );
        let saved = self.comments.insert(&comment).await?;
        info!("Comment {} added to interview {} by {}", saved.id, interview_id, subject);

        match self.policy.after_comment_added(interview_id) {
            CommentCacheWrite::OverwriteWithId(key) => {
                if let Err(e) = self.cache.set(&key, &saved.id, self.policy.ttl()).await {
                    warn!("Cache write failed for '{}': {}", key, e);
                }
            }
            CommentCacheWrite::Delete(keys) => self.cache.invalidate(&keys).await,
        }

        Ok(saved.id)
    }
}

impl std::fmt::Debug for CommentServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommentServiceComponent")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
