//! Service layer for task creation, listing, and authorized updates.

use crate::identity::Caller;
use crate::notification::{NotificationKind, Notifier, render};
use crate::task::{
    domain::{Task, TaskDomainError, TaskDraft, TaskId, TaskPatch, TaskPriority},
    ports::{TaskStore, TaskStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Input for creating a task.
///
/// Field presence is validated by the service; `priority` is parsed
/// leniently, defaulting to medium when absent or unrecognized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTaskInput {
    /// Task title, required non-empty.
    pub title: String,
    /// Optional description; defaults to empty.
    pub description: Option<String>,
    /// Assignee email identifier, required non-empty.
    pub assigned_to: String,
    /// Deadline as an ISO-8601 string, required non-empty.
    pub deadline: String,
    /// Priority label; absent or unrecognized values default to medium.
    pub priority: Option<String>,
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// A required field is missing or invalid.
    #[error(transparent)]
    InvalidInput(#[from] TaskDomainError),

    /// The caller lacks the admin role required to create tasks.
    #[error("only admins can create tasks")]
    CreateRequiresAdmin,

    /// The caller is neither an admin nor the assignee of the task.
    #[error("not authorized to update this task")]
    UpdateNotAuthorized,

    /// A non-admin patch touches a field other than `status`.
    #[error("team members can only update task status")]
    StatusOnlyForTeamMembers,

    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for task service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Task-assignment orchestration service.
///
/// Receives the record store, notifier, and clock at construction; there are
/// no process-wide service handles.
pub struct TaskBoardService<S, N, C>
where
    S: TaskStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    notifier: Arc<N>,
    clock: Arc<C>,
}

impl<S, N, C> Clone for TaskBoardService<S, N, C>
where
    S: TaskStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            notifier: Arc::clone(&self.notifier),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S, N, C> TaskBoardService<S, N, C>
where
    S: TaskStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(store: Arc<S>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            store,
            notifier,
            clock,
        }
    }

    /// Creates a new pending task on behalf of an admin caller.
    ///
    /// The assignee receives a best-effort `assigned` notification; a
    /// notification failure never fails the creation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::CreateRequiresAdmin`] for non-admin callers,
    /// [`TaskBoardError::InvalidInput`] when a required field is blank, or
    /// [`TaskBoardError::Store`] when persistence fails.
    pub async fn create_task(
        &self,
        caller: &Caller,
        input: CreateTaskInput,
    ) -> TaskBoardResult<Task> {
        if !caller.is_admin() {
            return Err(TaskBoardError::CreateRequiresAdmin);
        }

        let mut draft = TaskDraft::new(input.title, input.assigned_to, input.deadline)?
            .with_priority(TaskPriority::lenient(input.priority.as_deref()));
        if let Some(description) = input.description {
            draft = draft.with_description(description);
        }

        let task = Task::create(draft, caller.email(), &*self.clock);
        self.store.insert_new(&task).await?;

        self.dispatch(NotificationKind::Assigned, task.assigned_to(), &task)
            .await;
        Ok(task)
    }

    /// Lists tasks visible to the caller.
    ///
    /// Admins see every task; team members see exactly the tasks assigned to
    /// them. No ordering is guaranteed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Store`] when the store is unavailable.
    pub async fn list_tasks(&self, caller: &Caller) -> TaskBoardResult<Vec<Task>> {
        let tasks = if caller.is_admin() {
            self.store.list_all().await?
        } else {
            self.store.find_by_assignee(caller.email()).await?
        };
        Ok(tasks)
    }

    /// Applies a partial update to a task on behalf of the caller.
    ///
    /// Admins may patch any mutable field of any task. A non-admin assignee
    /// may patch only `status`; any other key present rejects the whole
    /// request. `taskId` and `createdAt` are never applied. The patch plus
    /// the refreshed `updatedAt` land atomically, and the returned record is
    /// the authoritative post-update state.
    ///
    /// Patched values are validated after the existence and role checks, so
    /// an unknown task is a not-found and an unauthorized caller a forbidden
    /// error even when the patch also carries a blank value.
    ///
    /// After a successful update, at most one `updated` notification goes
    /// out: to the assignee when an admin other than the assignee updated,
    /// or to the creator when the assignee updated. Notification failures
    /// are logged and swallowed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::NotFound`] for an unknown task,
    /// [`TaskBoardError::UpdateNotAuthorized`] or
    /// [`TaskBoardError::StatusOnlyForTeamMembers`] when the caller fails
    /// the role checks, [`TaskBoardError::InvalidInput`] when a patched
    /// value violates a field invariant, or [`TaskBoardError::Store`] when
    /// persistence fails.
    pub async fn update_task(
        &self,
        caller: &Caller,
        task_id: TaskId,
        patch: TaskPatch,
    ) -> TaskBoardResult<Task> {
        let task = self
            .store
            .find_by_id(task_id)
            .await?
            .ok_or(TaskBoardError::NotFound(task_id))?;

        let is_admin = caller.is_admin();
        let is_assignee = task.assigned_to() == caller.email();

        if !is_admin && !is_assignee {
            return Err(TaskBoardError::UpdateNotAuthorized);
        }
        if !is_admin && !patch.is_status_only() {
            return Err(TaskBoardError::StatusOnlyForTeamMembers);
        }

        patch.validate()?;

        let updated = self
            .store
            .apply_patch(task_id, &patch, self.clock.utc())
            .await?
            .ok_or(TaskBoardError::NotFound(task_id))?;

        if is_admin {
            if caller.email() != updated.assigned_to() {
                self.dispatch(NotificationKind::Updated, updated.assigned_to(), &updated)
                    .await;
            }
        } else if !updated.created_by().is_empty() {
            self.dispatch(NotificationKind::Updated, updated.created_by(), &updated)
                .await;
        }

        Ok(updated)
    }

    /// Renders and sends a notification, swallowing every failure.
    async fn dispatch(&self, kind: NotificationKind, recipient: &str, task: &Task) {
        let message = match render(kind, recipient, task) {
            Ok(message) => message,
            Err(error) => {
                warn!(%error, recipient, "failed to render task notification");
                return;
            }
        };
        if let Err(error) = self.notifier.send(&message).await {
            warn!(%error, recipient, "failed to send task notification");
        }
    }
}
