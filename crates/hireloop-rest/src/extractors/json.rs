//! JSON body extractor with enveloped rejections.
//!
//! Field validation happens in the services, after the caller check, so a
//! malformed body from an anonymous caller still reports `UNAUTHORIZED` on
//! operations that need identity. This extractor only handles bodies that
//! cannot be parsed at all.

use crate::responses::ApiResponse;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hireloop_core::ErrorResponse;
use serde::de::DeserializeOwned;

/// `Json<T>` whose rejection uses the API error envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

/// Rejection for [`ApiJson`].
#[derive(Debug)]
pub struct JsonBodyRejection(JsonRejection);

impl IntoResponse for JsonBodyRejection {
    fn into_response(self) -> Response {
        let error_response = ErrorResponse {
            code: "INVALID_JSON".to_string(),
            message: format!("Invalid JSON: {}", self.0.body_text()),
            details: None,
        };
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(error_response)),
        )
            .into_response()
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(JsonBodyRejection)?;
        Ok(ApiJson(value))
    }
}
