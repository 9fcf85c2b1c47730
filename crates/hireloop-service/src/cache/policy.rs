//! Key selection and invalidation sets per mutation.

use super::cache_keys;
use hireloop_config::{CacheConfig, CacheInvalidation};
use hireloop_core::{Interview, InterviewId, Subject, User};
use std::time::Duration;

/// TTL applied to every cache entry unless configured otherwise.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// What a comment insert does to the interview's comment list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentCacheWrite {
    /// Overwrite the list key with the new comment id.
    OverwriteWithId(String),
    /// Delete the listed keys.
    Delete(Vec<String>),
}

/// TTL plus the invalidation mode, shared by every service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    ttl: Duration,
    mode: CacheInvalidation,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_TTL, CacheInvalidation::Scoped)
    }
}

impl From<&CacheConfig> for CachePolicy {
    fn from(config: &CacheConfig) -> Self {
        Self::new(config.ttl(), config.invalidation)
    }
}

impl CachePolicy {
    /// Creates a policy.
    #[must_use]
    pub const fn new(ttl: Duration, mode: CacheInvalidation) -> Self {
        Self { ttl, mode }
    }

    /// The historical invalidation behaviour.
    #[must_use]
    pub const fn legacy() -> Self {
        Self::new(DEFAULT_TTL, CacheInvalidation::Legacy)
    }

    /// Exact per-mutation invalidation.
    #[must_use]
    pub const fn scoped() -> Self {
        Self::new(DEFAULT_TTL, CacheInvalidation::Scoped)
    }

    /// Entry TTL.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Invalidation mode.
    #[must_use]
    pub const fn mode(&self) -> CacheInvalidation {
        self.mode
    }

    // ============ Read keys ============

    /// Key for "all interviews". Legacy mode shares the caller's "my interviews" key.
    #[must_use]
    pub fn all_interviews_key(&self, caller: &Subject) -> String {
        match self.mode {
            CacheInvalidation::Legacy => cache_keys::interviews_by_user(caller),
            CacheInvalidation::Scoped => cache_keys::interviews_all(),
        }
    }

    /// Key for the caller's own interviews.
    #[must_use]
    pub fn my_interviews_key(&self, caller: &Subject) -> String {
        cache_keys::interviews_by_user(caller)
    }

    /// Key for the user list.
    #[must_use]
    pub fn all_users_key(&self, caller: &Subject) -> String {
        match self.mode {
            CacheInvalidation::Legacy => cache_keys::users_by_caller(caller),
            CacheInvalidation::Scoped => cache_keys::users_all(),
        }
    }

    // ============ Invalidation sets ============

    /// Keys deleted before an interview status is patched.
    #[must_use]
    pub fn before_status_update(&self, id: InterviewId) -> Vec<String> {
        match self.mode {
            CacheInvalidation::Legacy => vec![cache_keys::interview_by_id(id)],
            CacheInvalidation::Scoped => Vec::new(),
        }
    }

    /// Keys deleted after an interview status was patched.
    #[must_use]
    pub fn after_status_update(&self, patched: &Interview) -> Vec<String> {
        match self.mode {
            CacheInvalidation::Legacy => Vec::new(),
            CacheInvalidation::Scoped => vec![
                cache_keys::interview_by_id(patched.id),
                cache_keys::interview_by_stream_call_id(&patched.stream_call_id),
                cache_keys::interviews_by_user(&Subject::new(patched.candidate_id.clone())),
                cache_keys::interviews_all(),
            ],
        }
    }

    /// Keys deleted after an interview was created.
    #[must_use]
    pub fn after_interview_created(&self, created: &Interview) -> Vec<String> {
        match self.mode {
            CacheInvalidation::Legacy => Vec::new(),
            CacheInvalidation::Scoped => vec![
                cache_keys::interviews_by_user(&Subject::new(created.candidate_id.clone())),
                cache_keys::interviews_all(),
                cache_keys::interview_by_stream_call_id(&created.stream_call_id),
            ],
        }
    }

    /// Cache effect of inserting a comment.
    #[must_use]
    pub fn after_comment_added(&self, interview_id: InterviewId) -> CommentCacheWrite {
        let key = cache_keys::comments_by_interview(interview_id);
        match self.mode {
            CacheInvalidation::Legacy => CommentCacheWrite::OverwriteWithId(key),
            CacheInvalidation::Scoped => CommentCacheWrite::Delete(vec![key]),
        }
    }

    /// Keys deleted after a user record was created by a sync.
    #[must_use]
    pub fn after_user_created(&self, created: &User) -> Vec<String> {
        match self.mode {
            CacheInvalidation::Legacy => Vec::new(),
            CacheInvalidation::Scoped => vec![
                cache_keys::users_all(),
                cache_keys::user_by_clerk_id(&created.clerk_id),
            ],
        }
    }
}
