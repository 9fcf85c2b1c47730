//! Interview controller.

use super::parse_interview_id;
use crate::{
    extractors::{ApiJson, CurrentCaller},
    responses::{created, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use hireloop_core::{Interview, NewInterview};
use hireloop_service::{CreatedResponse, UpdateStatusRequest};
use tracing::debug;

/// Creates the interview router, comments included.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_interviews).post(create_interview))
        .route("/mine", get(list_my_interviews))
        .route("/by-call/:stream_call_id", get(get_by_stream_call_id))
        .route("/:id/status", patch(update_status))
        .merge(super::comment_controller::router())
}

/// List every interview.
#[utoipa::path(
    get,
    path = "/interviews",
    tag = "interviews",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All interviews", body = [Interview]),
        (status = 401, description = "No caller identity")
    )
)]
pub async fn list_interviews(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
) -> ApiResult<Vec<Interview>> {
    debug!("List interviews request");
    let interviews = state.interview_service.list_all(&caller).await?;
    ok(interviews)
}

/// List the caller's interviews as a candidate. Anonymous callers get `[]`.
#[utoipa::path(
    get,
    path = "/interviews/mine",
    tag = "interviews",
    responses(
        (status = 200, description = "Interviews where the caller is the candidate", body = [Interview])
    )
)]
pub async fn list_my_interviews(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
) -> ApiResult<Vec<Interview>> {
    let interviews = state.interview_service.list_mine(&caller).await?;
    ok(interviews)
}

/// Find the interview bound to a video call.
#[utoipa::path(
    get,
    path = "/interviews/by-call/{stream_call_id}",
    tag = "interviews",
    params(("stream_call_id" = String, Path, description = "Video call id")),
    responses(
        (status = 200, description = "The interview, or null", body = Option<Interview>)
    )
)]
pub async fn get_by_stream_call_id(
    State(state): State<AppState>,
    Path(stream_call_id): Path<String>,
) -> ApiResult<Option<Interview>> {
    debug!("Get interview by call: {}", stream_call_id);
    let interview = state
        .interview_service
        .get_by_stream_call_id(&stream_call_id)
        .await?;
    ok(interview)
}

/// Schedule an interview.
#[utoipa::path(
    post,
    path = "/interviews",
    tag = "interviews",
    security(("bearer_auth" = [])),
    request_body = NewInterview,
    responses(
        (status = 201, description = "Interview created", body = CreatedResponse),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "No caller identity")
    )
)]
pub async fn create_interview(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    ApiJson(request): ApiJson<NewInterview>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedResponse>>), AppError> {
    debug!("Create interview request: {}", request.title);
    let id = state.interview_service.create(&caller, request).await?;
    Ok(created(CreatedResponse::new(id)))
}

/// Patch an interview's status.
#[utoipa::path(
    patch,
    path = "/interviews/{id}/status",
    tag = "interviews",
    params(("id" = String, Path, description = "Interview id")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Patched interview", body = Interview),
        (status = 404, description = "Unknown interview")
    )
)]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateStatusRequest>,
) -> ApiResult<Interview> {
    debug!("Update status request: {} -> {}", id, request.status.as_str());
    let interview_id = parse_interview_id(&id)?;
    let interview = state
        .interview_service
        .update_status(interview_id, request.status)
        .await?;
    ok(interview)
}
