//! JSON-over-HTTP surface for the task service.
//!
//! Routes bytes to the task service and maps service errors onto status
//! codes. Authentication happens once at the boundary: the bearer credential
//! is resolved to a [`crate::identity::Caller`] that the handlers pass into
//! every service call.

pub mod auth;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod state;

#[cfg(test)]
mod tests;

pub use error::ApiError;
pub use extract::BodyJson;
pub use state::AppState;

use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, Method, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, put},
};
use mockable::Clock;

use crate::identity::IdentityProvider;
use crate::notification::Notifier;
use crate::task::ports::TaskStore;

/// Builds the application router over the given state.
pub fn router<S, N, C, I>(state: AppState<S, N, C, I>) -> Router
where
    S: TaskStore + 'static,
    N: Notifier + 'static,
    C: Clock + Send + Sync + 'static,
    I: IdentityProvider + 'static,
{
    let allowed_origin = state.allowed_origin().to_owned();
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route(
            "/tasks",
            get(handlers::list_tasks::<S, N, C, I>).post(handlers::create_task::<S, N, C, I>),
        )
        .route("/tasks/{task_id}", put(handlers::update_task::<S, N, C, I>))
        .layer(middleware::from_fn(move |request: Request, next: Next| {
            let origin = allowed_origin.clone();
            async move { cross_origin(origin, request, next).await }
        }))
        .with_state(state)
}

/// Answers preflight requests and stamps the allowed origin on every
/// response.
async fn cross_origin(origin: String, request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::OK.into_response();
        apply_cors_headers(&mut response, &origin);
        return response;
    }
    let mut response = next.run(request).await;
    apply_cors_headers(&mut response, &origin);
    response
}

fn apply_cors_headers(response: &mut Response, origin: &str) {
    let origin_value =
        HeaderValue::from_str(origin).unwrap_or_else(|_| HeaderValue::from_static("*"));
    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin_value);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(
            "Origin, X-Requested-With, Content-Type, Accept, Authorization",
        ),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
}
