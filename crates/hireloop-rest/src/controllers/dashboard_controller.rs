//! Dashboard controller.

use crate::{
    extractors::CurrentCaller,
    responses::{ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use chrono::{FixedOffset, Utc};
use hireloop_core::HireloopError;
use hireloop_service::DashboardSummary;
use serde::Deserialize;
use utoipa::IntoParams;

/// Caller's local clock, as minutes east of UTC.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(summary))
}

/// Role-specific landing summary.
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "dashboard",
    security(("bearer_auth" = [])),
    params(DashboardQuery),
    responses(
        (status = 200, description = "Dashboard summary", body = DashboardSummary),
        (status = 401, description = "No caller identity")
    )
)]
pub async fn summary(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<DashboardSummary> {
    let offset = query
        .utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| {
            AppError(HireloopError::validation(format!(
                "Invalid UTC offset: {} minutes",
                query.utc_offset_minutes
            )))
        })?;

    let now = Utc::now().with_timezone(&offset);
    let summary = state.dashboard_service.summary(&caller, now).await?;
    ok(summary)
}
