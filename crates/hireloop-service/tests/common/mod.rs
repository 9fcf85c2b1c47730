//! Shared fixtures for the cache-aside tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use hireloop_core::{
    Caller, Email, HireloopError, HireloopResult, Interview, InterviewId, InterviewStatus,
    NewInterview, NewUser,
};
use hireloop_repository::{InMemoryInterviewRepository, InterviewRepository};
use hireloop_service::CacheInterface;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration as StdDuration;

/// Interview store that counts reads, to tell hits from misses.
#[derive(Default)]
pub struct CountingInterviewStore {
    inner: InMemoryInterviewRepository,
    reads: AtomicUsize,
}

impl CountingInterviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn record_read(&self) {
        self.reads.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl InterviewRepository for CountingInterviewStore {
    async fn insert(&self, interview: &Interview) -> HireloopResult<Interview> {
        self.inner.insert(interview).await
    }

    async fn find_all(&self) -> HireloopResult<Vec<Interview>> {
        self.record_read();
        self.inner.find_all().await
    }

    async fn find_by_candidate(&self, candidate_id: &str) -> HireloopResult<Vec<Interview>> {
        self.record_read();
        self.inner.find_by_candidate(candidate_id).await
    }

    async fn find_by_stream_call_id(&self, stream_call_id: &str) -> HireloopResult<Option<Interview>> {
        self.record_read();
        self.inner.find_by_stream_call_id(stream_call_id).await
    }

    async fn find_by_id(&self, id: InterviewId) -> HireloopResult<Option<Interview>> {
        self.record_read();
        self.inner.find_by_id(id).await
    }

    async fn update_status(
        &self,
        id: InterviewId,
        status: InterviewStatus,
        now: DateTime<Utc>,
    ) -> HireloopResult<Interview> {
        self.inner.update_status(id, status, now).await
    }
}

/// Cache backend whose every call fails, like an unreachable Redis.
#[derive(Debug, Default)]
pub struct FailingCache;

#[async_trait]
impl CacheInterface for FailingCache {
    async fn get_raw(&self, _key: &str) -> HireloopResult<Option<String>> {
        Err(HireloopError::cache("connection refused"))
    }

    async fn set_raw(&self, _key: &str, _value: &str, _ttl: StdDuration) -> HireloopResult<()> {
        Err(HireloopError::cache("connection refused"))
    }

    async fn delete(&self, _key: &str) -> HireloopResult<bool> {
        Err(HireloopError::cache("connection refused"))
    }

    async fn exists(&self, _key: &str) -> HireloopResult<bool> {
        Err(HireloopError::cache("connection refused"))
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

pub fn interviewer() -> Caller {
    Caller::authenticated("user_interviewer")
}

pub fn candidate() -> Caller {
    Caller::authenticated("user_candidate")
}

pub fn new_interview(stream_call_id: &str) -> NewInterview {
    NewInterview {
        title: "System design".to_string(),
        description: Some("Design a URL shortener".to_string()),
        start_time: Utc::now() + Duration::days(1),
        status: InterviewStatus::Scheduled,
        stream_call_id: stream_call_id.to_string(),
        candidate_id: "user_candidate".to_string(),
        interviewer_ids: vec!["user_interviewer".to_string()],
    }
}

pub fn new_user(clerk_id: &str) -> NewUser {
    NewUser {
        name: "Grace Hopper".to_string(),
        email: Email::new("grace@example.com").unwrap(),
        clerk_id: clerk_id.to_string(),
        image: Some("https://img.example.com/grace.png".to_string()),
    }
}
