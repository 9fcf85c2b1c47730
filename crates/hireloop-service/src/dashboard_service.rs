//! Dashboard service trait definition.

use crate::dto::DashboardSummary;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use hireloop_core::{Caller, HireloopResult, Interface};

/// Landing-page summary built from the cached interview and user reads.
#[async_trait]
pub trait DashboardService: Interface + Send + Sync {
    /// Summarizes the caller's interviews as of `now`, in the caller's local offset.
    async fn summary(&self, caller: &Caller, now: DateTime<FixedOffset>) -> HireloopResult<DashboardSummary>;
}
