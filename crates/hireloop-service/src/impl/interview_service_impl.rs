//! Interview service implementation.

use crate::cache::{cache_keys, CacheExt, CacheInterface, CachePolicy};
use crate::interview_service::InterviewService;
use async_trait::async_trait;
use chrono::Utc;
use hireloop_core::{
    Caller, HireloopResult, Interview, InterviewId, InterviewStatus, NewInterview, ValidateExt,
};
use hireloop_repository::InterviewRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Interview service backed by the `interviews` collection and the response cache.
#[derive(Component)]
#[shaku(interface = InterviewService)]
pub struct InterviewServiceComponent {
    #[shaku(inject)]
    interviews: Arc<dyn InterviewRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    policy: CachePolicy,
}

impl InterviewServiceComponent {
    /// Creates the service outside of a shaku module.
    #[must_use]
    pub fn new(
        interviews: Arc<dyn InterviewRepository>,
        cache: Arc<dyn CacheInterface>,
        policy: CachePolicy,
    ) -> Self {
        Self {
            interviews,
            cache,
            policy,
        }
    }
}

#[async_trait]
impl InterviewService for InterviewServiceComponent {
    async fn list_all(&self, caller: &Caller) -> HireloopResult<Vec<Interview>> {
        let subject = caller.require()?;
        let key = self.policy.all_interviews_key(subject);
        debug!("Listing all interviews for {} via '{}'", subject, key);

        self.cache
            .read_through(&key, self.policy.ttl(), || self.interviews.find_all())
            .await
    }

    async fn list_mine(&self, caller: &Caller) -> HireloopResult<Vec<Interview>> {
        let Some(subject) = caller.subject() else {
            debug!("Anonymous caller asked for their interviews");
            return Ok(Vec::new());
        };
        let key = self.policy.my_interviews_key(subject);

        self.cache
            .read_through(&key, self.policy.ttl(), || {
                self.interviews.find_by_candidate(subject.as_str())
            })
            .await
    }

    async fn get_by_stream_call_id(&self, stream_call_id: &str) -> HireloopResult<Option<Interview>> {
        let key = cache_keys::interview_by_stream_call_id(stream_call_id);

        self.cache
            .read_through(&key, self.policy.ttl(), || {
                self.interviews.find_by_stream_call_id(stream_call_id)
            })
            .await
    }

    async fn create(&self, caller: &Caller, request: NewInterview) -> HireloopResult<InterviewId> {
        let subject = caller.require()?;
        request.validate_request()?;

        let created = self.interviews.insert(&Interview::create(request)).await?;
        info!(
            "Interview {} created by {} for candidate {}",
            created.id, subject, created.candidate_id
        );

        self.cache
            .invalidate(&self.policy.after_interview_created(&created))
            .await;
        Ok(created.id)
    }

    async fn update_status(&self, id: InterviewId, status: InterviewStatus) -> HireloopResult<Interview> {
        self.cache.invalidate(&self.policy.before_status_update(id)).await;

        let patched = self.interviews.update_status(id, status, Utc::now()).await?;
        info!("Interview {} moved to {}", id, status);

        self.cache
            .invalidate(&self.policy.after_status_update(&patched))
            .await;
        Ok(patched)
    }
}

impl std::fmt::Debug for InterviewServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterviewServiceComponent")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::InMemoryCache;
    use chrono::Duration;
    use hireloop_core::HireloopError;
    use hireloop_repository::InMemoryInterviewRepository;

    fn service(policy: CachePolicy) -> (InterviewServiceComponent, Arc<InMemoryCache>) {
        let cache = Arc::new(InMemoryCache::new());
        let service = InterviewServiceComponent::new(
            Arc::new(InMemoryInterviewRepository::new()),
            cache.clone(),
            policy,
        );
        (service, cache)
    }

    fn request(candidate: &str, call: &str) -> NewInterview {
        NewInterview {
            title: "Frontend round".to_string(),
            description: None,
            start_time: Utc::now() + Duration::hours(3),
            status: InterviewStatus::Scheduled,
            stream_call_id: call.to_string(),
            candidate_id: candidate.to_string(),
            interviewer_ids: vec!["user_int".to_string()],
        }
    }

    #[tokio::test]
    async fn test_create_requires_identity() {
        let (service, _) = service(CachePolicy::scoped());
        let err = service
            .create(&Caller::Anonymous, request("user_u1", "c1"))
            .await
            .unwrap_err();
        assert!(matches!(err, HireloopError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_create_validates_payload() {
        let (service, _) = service(CachePolicy::scoped());
        let mut bad = request("user_u1", "c1");
        bad.title = String::new();
        let err = service
            .create(&Caller::authenticated("user_int"), bad)
            .await
            .unwrap_err();
        assert!(matches!(err, HireloopError::Validation(_)));
    }

    #[tokio::test]
    async fn test_missing_call_is_cached_as_null() {
        let (service, cache) = service(CachePolicy::scoped());
        assert!(service.get_by_stream_call_id("nope").await.unwrap().is_none());
        assert_eq!(
            cache.get_raw("interview:streamCallId:nope").await.unwrap().as_deref(),
            Some("null")
        );
    }

    #[tokio::test]
    async fn test_update_status_unknown_id_is_not_found() {
        let (service, _) = service(CachePolicy::scoped());
        let err = service
            .update_status(InterviewId::new(), InterviewStatus::Live)
            .await
            .unwrap_err();
        assert!(matches!(err, HireloopError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_scoped_create_refreshes_candidate_list() {
        let (service, _) = service(CachePolicy::scoped());
        let candidate = Caller::authenticated("user_u1");
        assert!(service.list_mine(&candidate).await.unwrap().is_empty());

        service
            .create(&Caller::authenticated("user_int"), request("user_u1", "c1"))
            .await
            .unwrap();
        assert_eq!(service.list_mine(&candidate).await.unwrap().len(), 1);
    }
}
