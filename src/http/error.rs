//! HTTP error envelope and status-code mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::identity::IdentityError;
use crate::task::services::TaskBoardError;

/// An error response: a status code plus a `{"error": …}` JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Creates an error response.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// The 401 returned when no usable bearer credential accompanies the
    /// request.
    #[must_use]
    pub fn unauthenticated() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "missing or invalid authorization credential",
        )
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the client-visible message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<TaskBoardError> for ApiError {
    fn from(err: TaskBoardError) -> Self {
        match &err {
            TaskBoardError::InvalidInput(_) => Self::new(StatusCode::BAD_REQUEST, err.to_string()),
            TaskBoardError::CreateRequiresAdmin
            | TaskBoardError::UpdateNotAuthorized
            | TaskBoardError::StatusOnlyForTeamMembers => {
                Self::new(StatusCode::FORBIDDEN, err.to_string())
            }
            TaskBoardError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "task not found"),
            TaskBoardError::Store(cause) => {
                // No internal detail leaks to the client.
                error!(error = %cause, "task store operation failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        }
    }
}

impl From<IdentityError> for ApiError {
    fn from(err: IdentityError) -> Self {
        match &err {
            IdentityError::UnknownCredential => {
                Self::new(StatusCode::UNAUTHORIZED, err.to_string())
            }
            IdentityError::Provider(cause) => {
                error!(error = %cause, "identity provider failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        }
    }
}
