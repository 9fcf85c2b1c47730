//! Plain wiring of the service graph.
//!
//! The MySQL/Redis deployment is wired through a shaku module in the server;
//! this builder covers the in-memory deployment and tests.

use crate::cache::{CacheInterface, CachePolicy, InMemoryCache};
use crate::r#impl::{
    CommentServiceComponent, DashboardServiceComponent, InterviewServiceComponent,
    UserServiceComponent,
};
use crate::{CommentService, DashboardService, InterviewService, UserService};
use hireloop_repository::{
    CommentRepository, InMemoryCommentRepository, InMemoryInterviewRepository,
    InMemoryUserRepository, InterviewRepository, UserRepository,
};
use std::sync::Arc;

/// Every service the HTTP layer talks to.
#[derive(Clone)]
pub struct ServiceSet {
    pub interviews: Arc<dyn InterviewService>,
    pub comments: Arc<dyn CommentService>,
    pub users: Arc<dyn UserService>,
    pub dashboard: Arc<dyn DashboardService>,
}

impl ServiceSet {
    /// Builds the services over the given stores and cache.
    #[must_use]
    pub fn new(
        interview_store: Arc<dyn InterviewRepository>,
        comment_store: Arc<dyn CommentRepository>,
        user_store: Arc<dyn UserRepository>,
        cache: Arc<dyn CacheInterface>,
        policy: CachePolicy,
    ) -> Self {
        let interviews: Arc<dyn InterviewService> = Arc::new(InterviewServiceComponent::new(
            interview_store,
            cache.clone(),
            policy,
        ));
        let users: Arc<dyn UserService> =
            Arc::new(UserServiceComponent::new(user_store, cache.clone(), policy));
        let comments: Arc<dyn CommentService> =
            Arc::new(CommentServiceComponent::new(comment_store, cache, policy));
        let dashboard: Arc<dyn DashboardService> = Arc::new(DashboardServiceComponent::new(
            interviews.clone(),
            users.clone(),
        ));

        Self {
            interviews,
            comments,
            users,
            dashboard,
        }
    }

    /// In-memory stores with the given cache.
    #[must_use]
    pub fn in_memory_with_cache(cache: Arc<dyn CacheInterface>, policy: CachePolicy) -> Self {
        Self::new(
            Arc::new(InMemoryInterviewRepository::new()),
            Arc::new(InMemoryCommentRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
            cache,
            policy,
        )
    }

    /// In-memory stores and an in-process cache.
    #[must_use]
    pub fn in_memory(policy: CachePolicy) -> Self {
        Self::in_memory_with_cache(Arc::new(InMemoryCache::new()), policy)
    }
}

impl std::fmt::Debug for ServiceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceSet").finish_non_exhaustive()
    }
}
