use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::response::Response;
use serde::de::DeserializeOwned;

use crate::application::services::InterviewError;

use super::error_response::internal_error;

/// `Json` whose rejection is the same `{error}` body every handler returns.
pub struct ApiJson<T>(pub T);

/// `Query` counterpart of [`ApiJson`].
pub struct ApiQuery<T>(pub T);

fn reject(body_text: String) -> Response {
    let error = InterviewError::Validation(body_text);
    tracing::warn!(error = %error, "Rejected request");
    internal_error(error.to_string())
}

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| ApiJson(value))
            .map_err(|e| reject(e.body_text()))
    }
}

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| ApiQuery(value))
            .map_err(|e| reject(e.body_text()))
    }
}
