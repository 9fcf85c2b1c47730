//! In-memory interview collection.

use crate::traits::InterviewRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hireloop_core::{HireloopError, HireloopResult, Interview, InterviewId, InterviewStatus};
use parking_lot::RwLock;
use tracing::debug;

/// In-memory `interviews` collection.
#[derive(Debug, Default)]
pub struct InMemoryInterviewRepository {
    interviews: RwLock<Vec<Interview>>,
}

impl InMemoryInterviewRepository {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection holding `interviews`.
    #[must_use]
    pub fn with_interviews(interviews: Vec<Interview>) -> Self {
        Self {
            interviews: RwLock::new(interviews),
        }
    }
}

#[async_trait]
impl InterviewRepository for InMemoryInterviewRepository {
    async fn insert(&self, interview: &Interview) -> HireloopResult<Interview> {
        debug!("Inserting interview {}", interview.id);
        self.interviews.write().push(interview.clone());
        Ok(interview.clone())
    }

    async fn find_all(&self) -> HireloopResult<Vec<Interview>> {
        Ok(self.interviews.read().clone())
    }

    async fn find_by_candidate(&self, candidate_id: &str) -> HireloopResult<Vec<Interview>> {
        Ok(self
            .interviews
            .read()
            .iter()
            .filter(|i| i.candidate_id == candidate_id)
            .cloned()
            .collect())
    }

    async fn find_by_stream_call_id(&self, stream_call_id: &str) -> HireloopResult<Option<Interview>> {
        Ok(self
            .interviews
            .read()
            .iter()
            .find(|i| i.stream_call_id == stream_call_id)
            .cloned())
    }

    async fn find_by_id(&self, id: InterviewId) -> HireloopResult<Option<Interview>> {
        Ok(self.interviews.read().iter().find(|i| i.id == id).cloned())
    }

    async fn update_status(
        &self,
        id: InterviewId,
        status: InterviewStatus,
        now: DateTime<Utc>,
    ) -> HireloopResult<Interview> {
        let mut interviews = self.interviews.write();
        let interview = interviews
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| HireloopError::not_found("Interview", id))?;
        interview.apply_status(status, now);
        Ok(interview.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use hireloop_core::NewInterview;

    fn interview(candidate: &str, call: &str) -> Interview {
        Interview::create(NewInterview {
            title: format!("Interview for {}", candidate),
            description: None,
            start_time: Utc::now() + Duration::hours(1),
            status: InterviewStatus::Scheduled,
            stream_call_id: call.to_string(),
            candidate_id: candidate.to_string(),
            interviewer_ids: vec!["user_int".to_string()],
        })
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryInterviewRepository::new();
        let first = repo.insert(&interview("u1", "c1")).await.unwrap();
        let second = repo.insert(&interview("u2", "c2")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.iter().map(|i| i.id).collect::<Vec<_>>(), vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn test_find_by_candidate_filters() {
        let repo = InMemoryInterviewRepository::with_interviews(vec![
            interview("u1", "c1"),
            interview("u2", "c2"),
            interview("u1", "c3"),
        ]);

        let mine = repo.find_by_candidate("u1").await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|i| i.candidate_id == "u1"));
        assert!(repo.find_by_candidate("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_stream_call_id() {
        let repo = InMemoryInterviewRepository::with_interviews(vec![interview("u1", "call-x")]);
        assert!(repo.find_by_stream_call_id("call-x").await.unwrap().is_some());
        assert!(repo.find_by_stream_call_id("call-y").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_status_completed_sets_end_time() {
        let repo = InMemoryInterviewRepository::new();
        let created = repo.insert(&interview("u1", "c1")).await.unwrap();
        let now = Utc::now();

        let updated = repo
            .update_status(created.id, InterviewStatus::Completed, now)
            .await
            .unwrap();
        assert_eq!(updated.status, InterviewStatus::Completed);
        assert_eq!(updated.end_time, Some(now));

        let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_status_unknown_id() {
        let repo = InMemoryInterviewRepository::new();
        let err = repo
            .update_status(InterviewId::new(), InterviewStatus::Live, Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(err, HireloopError::NotFound { .. }));
    }
}
