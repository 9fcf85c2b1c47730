//! Interview service trait definition.

use async_trait::async_trait;
use hireloop_core::{
    Caller, HireloopResult, Interface, Interview, InterviewId, InterviewStatus, NewInterview,
};

/// Cached access to interviews.
#[async_trait]
pub trait InterviewService: Interface + Send + Sync {
    /// Lists every interview. Requires an authenticated caller.
    async fn list_all(&self, caller: &Caller) -> HireloopResult<Vec<Interview>>;

    /// Lists the interviews where the caller is the candidate.
    ///
    /// Anonymous callers get an empty list rather than an error.
    async fn list_mine(&self, caller: &Caller) -> HireloopResult<Vec<Interview>>;

    /// Finds the interview bound to a video call. Absence is cached too.
    async fn get_by_stream_call_id(&self, stream_call_id: &str) -> HireloopResult<Option<Interview>>;

    /// Creates an interview. Requires an authenticated caller.
    async fn create(&self, caller: &Caller, request: NewInterview) -> HireloopResult<InterviewId>;

    /// Patches an interview's status; `completed` also stamps the end time.
    async fn update_status(&self, id: InterviewId, status: InterviewStatus) -> HireloopResult<Interview>;
}
