//! OpenAPI documentation configuration.

use crate::controllers::{HealthResponse, ReadinessResponse};
use hireloop_core::{
    Comment, CommentId, Email, ErrorResponse, FieldError, Interview, InterviewId, InterviewStatus,
    NewInterview, NewUser, User, UserId, UserRole,
};
use hireloop_service::{AddCommentRequest, CreatedResponse, DashboardSummary, UpdateStatusRequest};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// OpenAPI documentation for the Hireloop API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hireloop API",
        version = "1.0.0",
        description = "Interview scheduling: interviews, comments, users"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        crate::controllers::interview_controller::list_interviews,
        crate::controllers::interview_controller::list_my_interviews,
        crate::controllers::interview_controller::get_by_stream_call_id,
        crate::controllers::interview_controller::create_interview,
        crate::controllers::interview_controller::update_status,
        crate::controllers::comment_controller::list_comments,
        crate::controllers::comment_controller::add_comment,
        crate::controllers::user_controller::sync_user,
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::get_by_clerk_id,
        crate::controllers::dashboard_controller::summary,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            InterviewId,
            CommentId,
            UserId,
            InterviewStatus,
            UserRole,
            Email,
            Interview,
            Comment,
            User,
            NewInterview,
            NewUser,
            AddCommentRequest,
            UpdateStatusRequest,
            CreatedResponse,
            DashboardSummary,
            ErrorResponse,
            FieldError,
            HealthResponse,
            ReadinessResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "interviews", description = "Interview scheduling"),
        (name = "comments", description = "Interviewer feedback"),
        (name = "users", description = "User directory"),
        (name = "dashboard", description = "Landing summary"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Bearer JWT security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Identity provider session token"))
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/interviews",
            "/interviews/mine",
            "/interviews/by-call/{stream_call_id}",
            "/interviews/{id}/status",
            "/interviews/{id}/comments",
            "/users/sync",
            "/users",
            "/users/by-clerk/{clerk_id}",
            "/dashboard",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
