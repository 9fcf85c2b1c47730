//! Dashboard service implementation.

use crate::dashboard_service::DashboardService;
use crate::dto::{greeting_for_hour, DashboardSummary};
use crate::interview_service::InterviewService;
use crate::user_service::UserService;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Timelike, Utc};
use hireloop_core::{Caller, HireloopResult, InterviewStatus};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// Dashboard built on top of the interview and user services.
#[derive(Component)]
#[shaku(interface = DashboardService)]
pub struct DashboardServiceComponent {
    #[shaku(inject)]
    interviews: Arc<dyn InterviewService>,
    #[shaku(inject)]
    users: Arc<dyn UserService>,
}

impl DashboardServiceComponent {
    /// Creates the service outside of a shaku module.
    #[must_use]
    pub fn new(interviews: Arc<dyn InterviewService>, users: Arc<dyn UserService>) -> Self {
        Self { interviews, users }
    }
}

#[async_trait]
impl DashboardService for DashboardServiceComponent {
    async fn summary(&self, caller: &Caller, now: DateTime<FixedOffset>) -> HireloopResult<DashboardSummary> {
        let subject = caller.require()?;

        // Callers who never synced are treated as candidates.
        let role = self
            .users
            .get_by_clerk_id(subject.as_str())
            .await?
            .map(|user| user.role)
            .unwrap_or_default();

        let interviews = self.interviews.list_mine(caller).await?;
        let now_utc = now.with_timezone(&Utc);
        let upcoming = interviews.iter().filter(|i| i.is_upcoming(now_utc)).count();
        let completed = interviews
            .iter()
            .filter(|i| i.status == InterviewStatus::Completed)
            .count();

        debug!(
            "Dashboard for {}: {} interviews, {} upcoming",
            subject,
            interviews.len(),
            upcoming
        );

        Ok(DashboardSummary {
            role,
            greeting: greeting_for_hour(now.hour()).to_string(),
            total_interviews: interviews.len(),
            upcoming_interviews: upcoming,
            completed_interviews: completed,
        })
    }
}

impl std::fmt::Debug for DashboardServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardServiceComponent").finish_non_exhaustive()
    }
}
