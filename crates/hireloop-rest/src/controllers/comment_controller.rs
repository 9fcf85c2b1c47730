//! Comment controller, mounted under `/interviews/{id}/comments`.

use super::parse_interview_id;
use crate::{
    extractors::{ApiJson, CurrentCaller},
    responses::{created, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use hireloop_core::Comment;
use hireloop_service::{AddCommentRequest, CreatedResponse};
use tracing::debug;

pub fn router() -> Router<AppState> {
    Router::new().route("/:id/comments", get(list_comments).post(add_comment))
}

/// List an interview's comments.
#[utoipa::path(
    get,
    path = "/interviews/{id}/comments",
    tag = "comments",
    params(("id" = String, Path, description = "Interview id")),
    responses(
        (status = 200, description = "Comments in insertion order", body = [Comment])
    )
)]
pub async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<Comment>> {
    let interview_id = parse_interview_id(&id)?;
    let comments = state.comment_service.list_for_interview(interview_id).await?;
    ok(comments)
}

/// Add a comment as the calling interviewer.
#[utoipa::path(
    post,
    path = "/interviews/{id}/comments",
    tag = "comments",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Interview id")),
    request_body = AddCommentRequest,
    responses(
        (status = 201, description = "Comment added", body = CreatedResponse),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "No caller identity")
    )
)]
pub async fn add_comment(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<AddCommentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedResponse>>), AppError> {
    debug!("Add comment request on interview {}", id);
    let interview_id = parse_interview_id(&id)?;
    let comment_id = state
        .comment_service
        .add_comment(&caller, interview_id, request)
        .await?;
    Ok(created(CreatedResponse::new(comment_id)))
}
