//! Store port for task persistence, lookup, and atomic patching.

use crate::task::domain::{Task, TaskId, TaskPatch};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract over a keyed record store with an assignee
/// secondary index.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Stores a new task without overwriting an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateTask`] when the task identifier
    /// already exists.
    async fn insert_new(&self, task: &Task) -> TaskStoreResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>>;

    /// Atomically applies a validated patch to the record, stamping the given
    /// `updated_at`, and returns the authoritative post-update record.
    ///
    /// Returns `None` when the task does not exist. The patch and timestamp
    /// are applied under a single-record write so the persisted record is
    /// never a torn mix of patched fields and a stale `updatedAt`.
    async fn apply_patch(
        &self,
        id: TaskId,
        patch: &TaskPatch,
        updated_at: DateTime<Utc>,
    ) -> TaskStoreResult<Option<Task>>;

    /// Returns every stored task, in no guaranteed order.
    async fn list_all(&self) -> TaskStoreResult<Vec<Task>>;

    /// Returns the tasks assigned to the given principal, via the assignee
    /// index. The result set is identical to filtering [`Self::list_all`] on
    /// `assignedTo`.
    async fn find_by_assignee(&self, assignee: &str) -> TaskStoreResult<Vec<Task>>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
