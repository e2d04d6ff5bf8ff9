//! Bearer-credential authentication boundary.

use axum::http::{HeaderMap, header};

use super::error::ApiError;
use crate::identity::{Caller, IdentityProvider};

/// Resolves the request's bearer credential to a caller.
///
/// # Errors
///
/// Returns a 401 [`ApiError`] when the `Authorization` header is missing or
/// unusable, or when the identity provider rejects the token.
pub async fn authenticate<I>(identity: &I, headers: &HeaderMap) -> Result<Caller, ApiError>
where
    I: IdentityProvider,
{
    let header_value = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(ApiError::unauthenticated)?;

    let token = header_value
        .strip_prefix("Bearer ")
        .unwrap_or(header_value)
        .trim();
    if token.is_empty() {
        return Err(ApiError::unauthenticated());
    }

    let caller = identity.resolve(token).await?;
    Ok(caller)
}
