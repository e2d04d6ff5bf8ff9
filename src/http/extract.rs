//! Request-body extraction producing the standard error envelope.

use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON request body whose parse failures answer with the `{"error": …}`
/// envelope.
///
/// Axum's own [`Json`] rejection is a 422 with a plain-text body. Every
/// request-body failure here is a 400 instead, carrying the deserializer's
/// message, so malformed bodies surface exactly like any other invalid
/// input.
#[derive(Debug, Clone)]
pub struct BodyJson<T>(pub T);

impl<S, T> FromRequest<S> for BodyJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text()))?;
        Ok(Self(value))
    }
}
