//! Handler-level tests exercising the HTTP boundary directly.

use std::sync::Arc;

use axum::{
    Json,
    body::{Body, to_bytes},
    extract::{FromRequest, Path, Request, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::json;
use uuid::Uuid;

use super::{
    auth::authenticate,
    extract::BodyJson,
    handlers::{self, CreateTaskBody},
    state::AppState,
};
use crate::identity::{ADMIN_GROUP, Caller, StaticTokenDirectory};
use crate::notification::RecordingNotifier;
use crate::task::{
    adapters::memory::InMemoryTaskStore,
    domain::TaskPatch,
    services::TaskBoardService,
};

type TestState =
    AppState<InMemoryTaskStore, RecordingNotifier, DefaultClock, StaticTokenDirectory>;

fn state() -> TestState {
    let service = TaskBoardService::new(
        Arc::new(InMemoryTaskStore::new()),
        Arc::new(RecordingNotifier::new()),
        Arc::new(DefaultClock),
    );
    let directory = StaticTokenDirectory::new()
        .with_token("admin-token", Caller::new("bob@x.com", [ADMIN_GROUP]))
        .with_token("alice-token", Caller::new("alice@x.com", ["TeamMembers"]));
    AppState::new(service, Arc::new(directory), "*".to_owned())
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let value = HeaderValue::from_str(&format!("Bearer {token}")).expect("valid header");
    headers.insert(header::AUTHORIZATION, value);
    headers
}

fn ship_report() -> CreateTaskBody {
    CreateTaskBody {
        title: Some("Ship report".to_owned()),
        description: None,
        assigned_to: Some("alice@x.com".to_owned()),
        deadline: Some("2025-12-31".to_owned()),
        priority: Some("high".to_owned()),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn root_and_health_answer_without_credentials() {
    let Json(root) = handlers::root().await;
    let Json(health) = handlers::health().await;

    assert_eq!(root, json!({ "message": "Task Management API is running" }));
    assert_eq!(health, json!({ "status": "healthy" }));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_authorization_header_is_unauthorized() {
    let shared = state();

    let error = authenticate(shared.identity(), &HeaderMap::new())
        .await
        .expect_err("missing header rejected");

    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_token_is_unauthorized() {
    let shared = state();

    let error = authenticate(shared.identity(), &bearer("forged"))
        .await
        .expect_err("unknown token rejected");

    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_returns_201_with_the_persisted_task() {
    let shared = state();

    let (status, Json(task)) = handlers::create_task(
        State(shared.clone()),
        bearer("admin-token"),
        BodyJson(ship_report()),
    )
    .await
    .expect("creation succeeds");

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(task.assigned_to(), "alice@x.com");
    assert_eq!(task.created_by(), "bob@x.com");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_without_required_fields_is_bad_request() {
    let shared = state();

    let error = handlers::create_task(
        State(shared),
        bearer("admin-token"),
        BodyJson(CreateTaskBody {
            title: None,
            ..ship_report()
        }),
    )
    .await
    .expect_err("missing title rejected");

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_by_team_member_is_forbidden() {
    let shared = state();

    let error = handlers::create_task(State(shared), bearer("alice-token"), BodyJson(ship_report()))
        .await
        .expect_err("non-admin rejected");

    assert_eq!(error.status(), StatusCode::FORBIDDEN);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assignee_completes_a_task_over_the_wire() {
    let shared = state();
    let (_, Json(task)) = handlers::create_task(
        State(shared.clone()),
        bearer("admin-token"),
        BodyJson(ship_report()),
    )
    .await
    .expect("creation succeeds");

    let patch = serde_json::from_value(json!({ "status": "completed" })).expect("valid patch");
    let Json(updated) = handlers::update_task(
        State(shared.clone()),
        Path(task.task_id().into_inner()),
        bearer("alice-token"),
        BodyJson(patch),
    )
    .await
    .expect("status update succeeds");

    assert_eq!(updated.status().as_str(), "completed");

    let Json(mine) = handlers::list_tasks(State(shared), bearer("alice-token"))
        .await
        .expect("listing succeeds");
    assert_eq!(mine.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_unknown_task_is_not_found() {
    let shared = state();

    let patch = serde_json::from_value(json!({ "status": "completed" })).expect("valid patch");
    let error = handlers::update_task(
        State(shared),
        Path(Uuid::new_v4()),
        bearer("admin-token"),
        BodyJson(patch),
    )
    .await
    .expect_err("unknown task rejected");

    assert_eq!(error.status(), StatusCode::NOT_FOUND);
}

fn json_request(body: &str) -> Request {
    axum::http::Request::builder()
        .method("PUT")
        .uri("/tasks")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .expect("valid request")
}

#[rstest]
#[case::unknown_key(r#"{"status":"completed","bogus":1}"#)]
#[case::unrecognized_status(r#"{"status":"done"}"#)]
#[case::malformed_body("{not json")]
#[tokio::test(flavor = "multi_thread")]
async fn undeserializable_patch_body_is_bad_request_in_the_error_envelope(#[case] body: &str) {
    let error = BodyJson::<TaskPatch>::from_request(json_request(body), &())
        .await
        .expect_err("bad body rejected");

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);

    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let envelope: serde_json::Value = serde_json::from_slice(&bytes).expect("JSON envelope");
    assert!(envelope.get("error").is_some_and(serde_json::Value::is_string));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_patch_key_rejection_names_the_offending_field() {
    let error = BodyJson::<TaskPatch>::from_request(
        json_request(r#"{"status":"completed","bogus":1}"#),
        &(),
    )
    .await
    .expect_err("unknown key rejected");

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert!(error.message().contains("bogus"));
}
