//! Router tests driven through `tower::ServiceExt::oneshot`.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use hireloop_config::{SecurityConfig, ServerConfig};
use hireloop_rest::{create_router, AppState};
use hireloop_security::TokenProvider;
use hireloop_service::{CachePolicy, ServiceSet};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    tokens: Arc<TokenProvider>,
}

impl TestApp {
    fn new() -> Self {
        let tokens = Arc::new(TokenProvider::new(Arc::new(SecurityConfig::default())));
        let state = AppState::new(ServiceSet::in_memory(CachePolicy::scoped()), tokens.clone());
        Self {
            router: create_router(state, &ServerConfig::default()),
            tokens,
        }
    }

    fn bearer(&self, subject: &str) -> String {
        format!("Bearer {}", self.tokens.issue_token(subject).unwrap())
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        auth: Option<String>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(auth) = auth {
            builder = builder.header(header::AUTHORIZATION, auth);
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn create_interview(&self, stream_call_id: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/v1/interviews",
                Some(self.bearer("user_interviewer")),
                Some(json!({
                    "title": "Pairing session",
                    "startTime": "2030-01-01T10:00:00Z",
                    "status": "scheduled",
                    "streamCallId": stream_call_id,
                    "candidateId": "user_candidate",
                    "interviewerIds": ["user_interviewer"]
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        body["data"]["id"].as_str().unwrap().to_string()
    }
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = TestApp::new();
    let (status, body) = app.send(Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = app.send(Method::GET, "/ready", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_anonymous_list_all_is_unauthorized() {
    let app = TestApp::new();
    let (status, body) = app.send(Method::GET, "/api/v1/interviews", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_invalid_token_is_treated_as_anonymous() {
    let app = TestApp::new();

    let (status, body) = app
        .send(Method::GET, "/api/v1/interviews/mine", Some("Bearer nope".to_string()), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_interview_lifecycle() {
    let app = TestApp::new();
    let id = app.create_interview("call-42").await;

    let (status, body) = app
        .send(Method::GET, "/api/v1/interviews/mine", Some(app.bearer("user_candidate")), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["status"], "scheduled");

    let (status, body) = app
        .send(
            Method::PATCH,
            &format!("/api/v1/interviews/{}/status", id),
            None,
            Some(json!({ "status": "completed" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "completed");
    assert!(body["data"]["endTime"].is_string());

    let (_, body) = app
        .send(Method::GET, "/api/v1/interviews/mine", Some(app.bearer("user_candidate")), None)
        .await;
    assert_eq!(body["data"][0]["status"], "completed");

    let (_, body) = app
        .send(Method::GET, "/api/v1/interviews/by-call/call-42", None, None)
        .await;
    assert_eq!(body["data"]["id"], id);
}

#[tokio::test]
async fn test_unknown_call_returns_null() {
    let app = TestApp::new();
    let (status, body) = app
        .send(Method::GET, "/api/v1/interviews/by-call/ghost", None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_patch_unknown_interview_is_not_found() {
    let app = TestApp::new();
    let (status, body) = app
        .send(
            Method::PATCH,
            "/api/v1/interviews/0190c7a4-6f1b-7c3e-9a2b-1d2e3f4a5b6c/status",
            None,
            Some(json!({ "status": "live" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_comments_round_trip() {
    let app = TestApp::new();
    let id = app.create_interview("call-7").await;
    let uri = format!("/api/v1/interviews/{}/comments", id);

    let (status, _) = app
        .send(Method::POST, &uri, None, Some(json!({ "content": "Nice", "rating": 4 })))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app
        .send(
            Method::POST,
            &uri,
            Some(app.bearer("user_interviewer")),
            Some(json!({ "content": "Nice", "rating": 9 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, _) = app
        .send(
            Method::POST,
            &uri,
            Some(app.bearer("user_interviewer")),
            Some(json!({ "content": "Nice", "rating": 4 })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = app.send(Method::GET, &uri, None, None).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["data"][0]["interviewerId"], "user_interviewer");
}

#[tokio::test]
async fn test_sync_user_then_lookup() {
    let app = TestApp::new();
    let payload = json!({
        "name": "Ada",
        "email": "ada@example.com",
        "clerkId": "user_ada"
    });

    let (status, body) = app
        .send(Method::POST, "/api/v1/users/sync", None, Some(payload.clone()))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["id"].is_string());

    let (_, body) = app
        .send(Method::POST, "/api/v1/users/sync", None, Some(payload))
        .await;
    assert!(body["data"].is_null());

    let (_, body) = app
        .send(Method::GET, "/api/v1/users/by-clerk/user_ada", None, None)
        .await;
    assert_eq!(body["data"]["role"], "candidate");
}

#[tokio::test]
async fn test_dashboard_requires_identity() {
    let app = TestApp::new();
    let (status, _) = app.send(Method::GET, "/api/v1/dashboard", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app
        .send(
            Method::GET,
            "/api/v1/dashboard?utcOffsetMinutes=60",
            Some(app.bearer("user_candidate")),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "candidate");
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/users/sync")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
