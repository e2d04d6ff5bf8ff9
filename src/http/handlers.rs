//! HTTP handlers for the task API.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use mockable::Clock;
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use super::{auth::authenticate, error::ApiError, extract::BodyJson, state::AppState};
use crate::identity::IdentityProvider;
use crate::notification::Notifier;
use crate::task::{
    domain::{Task, TaskId, TaskPatch},
    ports::TaskStore,
    services::CreateTaskInput,
};

/// Request body for `POST /tasks`.
///
/// Every field is optional at the wire level; the service rejects missing
/// required fields with a single 400 rather than a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody {
    /// Task title.
    pub title: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Assignee email identifier.
    pub assigned_to: Option<String>,
    /// Deadline as an ISO-8601 string.
    pub deadline: Option<String>,
    /// Priority label; unrecognized values fall back to medium.
    pub priority: Option<String>,
}

impl From<CreateTaskBody> for CreateTaskInput {
    fn from(body: CreateTaskBody) -> Self {
        Self {
            title: body.title.unwrap_or_default(),
            description: body.description,
            assigned_to: body.assigned_to.unwrap_or_default(),
            deadline: body.deadline.unwrap_or_default(),
            priority: body.priority,
        }
    }
}

/// `GET /` — service banner.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Task Management API is running" }))
}

/// `GET /health` — liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// `GET /tasks` — lists the tasks visible to the caller.
pub async fn list_tasks<S, N, C, I>(
    State(state): State<AppState<S, N, C, I>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Task>>, ApiError>
where
    S: TaskStore,
    N: Notifier,
    C: Clock + Send + Sync,
    I: IdentityProvider,
{
    let caller = authenticate(state.identity(), &headers).await?;
    let tasks = state.service().list_tasks(&caller).await?;
    Ok(Json(tasks))
}

/// `POST /tasks` — creates a task (admin only).
pub async fn create_task<S, N, C, I>(
    State(state): State<AppState<S, N, C, I>>,
    headers: HeaderMap,
    BodyJson(body): BodyJson<CreateTaskBody>,
) -> Result<(StatusCode, Json<Task>), ApiError>
where
    S: TaskStore,
    N: Notifier,
    C: Clock + Send + Sync,
    I: IdentityProvider,
{
    let caller = authenticate(state.identity(), &headers).await?;
    let task = state.service().create_task(&caller, body.into()).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /tasks/{task_id}` — applies a partial update.
pub async fn update_task<S, N, C, I>(
    State(state): State<AppState<S, N, C, I>>,
    Path(task_id): Path<Uuid>,
    headers: HeaderMap,
    BodyJson(patch): BodyJson<TaskPatch>,
) -> Result<Json<Task>, ApiError>
where
    S: TaskStore,
    N: Notifier,
    C: Clock + Send + Sync,
    I: IdentityProvider,
{
    let caller = authenticate(state.identity(), &headers).await?;
    let task = state
        .service()
        .update_task(&caller, TaskId::from_uuid(task_id), patch)
        .await?;
    Ok(Json(task))
}
