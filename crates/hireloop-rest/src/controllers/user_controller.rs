//! User controller.

use crate::{
    extractors::{ApiJson, CurrentCaller},
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Router,
};
use hireloop_core::{NewUser, User};
use hireloop_service::CreatedResponse;
use tracing::debug;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/sync", post(sync_user))
        .route("/by-clerk/:clerk_id", get(get_by_clerk_id))
}

/// Create the user for an external auth id if it is not known yet.
///
/// Called by the identity provider's webhook, so no caller identity is needed.
#[utoipa::path(
    post,
    path = "/users/sync",
    tag = "users",
    request_body = NewUser,
    responses(
        (status = 200, description = "New user id, or null when the user already existed", body = Option<CreatedResponse>),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn sync_user(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<NewUser>,
) -> ApiResult<Option<CreatedResponse>> {
    debug!("Sync user request: {}", request.clerk_id);
    let id = state.user_service.sync_user(request).await?;
    ok(id.map(CreatedResponse::new))
}

/// List every user.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 401, description = "No caller identity")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
) -> ApiResult<Vec<User>> {
    let users = state.user_service.list_users(&caller).await?;
    ok(users)
}

/// Find a user by external auth id.
#[utoipa::path(
    get,
    path = "/users/by-clerk/{clerk_id}",
    tag = "users",
    params(("clerk_id" = String, Path, description = "External auth id")),
    responses(
        (status = 200, description = "The user, or null", body = Option<User>)
    )
)]
pub async fn get_by_clerk_id(
    State(state): State<AppState>,
    Path(clerk_id): Path<String>,
) -> ApiResult<Option<User>> {
    let user = state.user_service.get_by_clerk_id(&clerk_id).await?;
    ok(user)
}
