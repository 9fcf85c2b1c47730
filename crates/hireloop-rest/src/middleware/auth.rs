//! Caller resolution middleware.

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};
use hireloop_security::IdentityProvider;
use std::sync::Arc;
use tracing::debug;

/// Authentication middleware state.
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub identity: Arc<dyn IdentityProvider>,
}

impl AuthMiddlewareState {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }
}

/// Resolves the caller from the `Authorization` header and stores it in the
/// request extensions.
///
/// Never rejects: a missing, malformed or invalid token resolves to
/// [`Caller::Anonymous`](hireloop_core::Caller::Anonymous) and the handler's service decides what that means.
pub async fn auth_middleware(
    State(state): State<AuthMiddlewareState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    let caller = state.identity.resolve(token);
    if let Some(subject) = caller.subject() {
        debug!("Authenticated caller: {}", subject);
    }
    request.extensions_mut().insert(caller);

    next.run(request).await
}

