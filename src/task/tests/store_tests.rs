//! Tests for the in-memory store adapter and its assignee index.

use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};

use crate::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{Task, TaskDraft, TaskId, TaskPatch, TaskStatus},
    ports::{TaskStore, TaskStoreError},
};

#[fixture]
fn store() -> InMemoryTaskStore {
    InMemoryTaskStore::new()
}

fn task_for(assignee: &str) -> Task {
    let draft = TaskDraft::new("Ship report", assignee, "2025-12-31").expect("valid draft");
    Task::create(draft, "bob@x.com", &DefaultClock)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_rejects_duplicate_identifier(store: InMemoryTaskStore) {
    let task = task_for("alice@x.com");
    store.insert_new(&task).await.expect("first insert succeeds");

    let result = store.insert_new(&task).await;

    assert!(matches!(result, Err(TaskStoreError::DuplicateTask(id)) if id == task.task_id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn apply_patch_on_missing_task_returns_none(store: InMemoryTaskStore) {
    let result = store
        .apply_patch(
            TaskId::new(),
            &TaskPatch::status(TaskStatus::Completed),
            DefaultClock.utc(),
        )
        .await
        .expect("store reachable");

    assert!(result.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assignee_lookup_matches_filtered_scan(store: InMemoryTaskStore) {
    for assignee in ["alice@x.com", "alice@x.com", "carol@x.com"] {
        store
            .insert_new(&task_for(assignee))
            .await
            .expect("insert succeeds");
    }

    let all = store.list_all().await.expect("scan succeeds");
    let mut filtered: Vec<TaskId> = all
        .iter()
        .filter(|task| task.assigned_to() == "alice@x.com")
        .map(Task::task_id)
        .collect();
    let mut indexed: Vec<TaskId> = store
        .find_by_assignee("alice@x.com")
        .await
        .expect("query succeeds")
        .iter()
        .map(Task::task_id)
        .collect();

    filtered.sort_unstable_by_key(|id| id.into_inner());
    indexed.sort_unstable_by_key(|id| id.into_inner());
    assert_eq!(indexed.len(), 2);
    assert_eq!(indexed, filtered);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn patching_assignee_moves_the_index_entry(store: InMemoryTaskStore) {
    let task = task_for("alice@x.com");
    store.insert_new(&task).await.expect("insert succeeds");

    let patch = TaskPatch {
        assigned_to: Some("carol@x.com".to_owned()),
        ..TaskPatch::default()
    };
    let updated = store
        .apply_patch(task.task_id(), &patch, DefaultClock.utc())
        .await
        .expect("store reachable")
        .expect("task exists");

    assert_eq!(updated.assigned_to(), "carol@x.com");
    assert!(
        store
            .find_by_assignee("alice@x.com")
            .await
            .expect("query succeeds")
            .is_empty()
    );
    let carols = store
        .find_by_assignee("carol@x.com")
        .await
        .expect("query succeeds");
    assert_eq!(carols.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn apply_patch_returns_the_post_update_record(store: InMemoryTaskStore) {
    let task = task_for("alice@x.com");
    store.insert_new(&task).await.expect("insert succeeds");

    let stamped = DefaultClock.utc();
    let updated = store
        .apply_patch(task.task_id(), &TaskPatch::status(TaskStatus::Completed), stamped)
        .await
        .expect("store reachable")
        .expect("task exists");

    assert_eq!(updated.status(), TaskStatus::Completed);
    assert_eq!(updated.updated_at(), stamped);

    let fetched = store
        .find_by_id(task.task_id())
        .await
        .expect("store reachable")
        .expect("task exists");
    assert_eq!(fetched, updated);
}
