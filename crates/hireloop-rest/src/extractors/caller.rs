//! Caller extractor.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use hireloop_core::Caller;

/// The caller resolved by the auth middleware.
///
/// Extraction is infallible; requests that bypassed the middleware are
/// anonymous.
#[derive(Debug, Clone)]
pub struct CurrentCaller(pub Caller);

impl std::ops::Deref for CurrentCaller {
    type Target = Caller;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentCaller
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let caller = parts.extensions.get::<Caller>().cloned().unwrap_or_default();
        Ok(CurrentCaller(caller))
    }
}
