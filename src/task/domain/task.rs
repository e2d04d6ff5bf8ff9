//! Task aggregate root and its status and priority enumerations.

use super::{ParsePriorityError, ParseStatusError, TaskDomainError, TaskId, TaskPatch};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task workflow status.
///
/// Statuses are conceptually ordered `pending → in-progress → completed`, but
/// no transition is restricted: any status may follow any other. The service
/// layer gates *who* may change the status, never *which* transition is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    Pending,
    /// Task is being worked on.
    InProgress,
    /// Task work has finished.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    /// Low urgency.
    Low,
    /// Default urgency.
    Medium,
    /// High urgency.
    High,
}

impl TaskPriority {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parses a priority, falling back to [`TaskPriority::Medium`] when the
    /// value is absent or unrecognized. Creation-time inputs are lenient;
    /// patches go through the strict [`TryFrom`] path instead.
    #[must_use]
    pub fn lenient(value: Option<&str>) -> Self {
        value
            .and_then(|raw| Self::try_from(raw).ok())
            .unwrap_or(Self::Medium)
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// Validated input for creating a task.
///
/// A draft guarantees the required fields (`title`, `assignedTo`, `deadline`)
/// are present and non-blank before a [`Task`] is materialized from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: String,
    assigned_to: String,
    deadline: String,
    priority: TaskPriority,
}

impl TaskDraft {
    /// Creates a draft from the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when `title`, `assigned_to`, or `deadline`
    /// is empty after trimming.
    pub fn new(
        title: impl Into<String>,
        assigned_to: impl Into<String>,
        deadline: impl Into<String>,
    ) -> Result<Self, TaskDomainError> {
        let title = title.into();
        let assigned_to = assigned_to.into();
        let deadline = deadline.into();
        require_non_blank(&title, TaskDomainError::EmptyTitle)?;
        require_non_blank(&assigned_to, TaskDomainError::EmptyAssignee)?;
        require_non_blank(&deadline, TaskDomainError::EmptyDeadline)?;

        Ok(Self {
            title,
            description: String::new(),
            assigned_to,
            deadline,
            priority: TaskPriority::Medium,
        })
    }

    /// Sets the optional description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }
}

/// Task aggregate root.
///
/// `task_id`, `created_at`, and `created_by` are immutable after creation;
/// `updated_at` is refreshed on every mutation. The wire representation is
/// camelCase JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    task_id: TaskId,
    title: String,
    description: String,
    assigned_to: String,
    deadline: String,
    priority: TaskPriority,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    created_by: String,
}

impl Task {
    /// Creates a new pending task from a validated draft.
    #[must_use]
    pub fn create(draft: TaskDraft, created_by: impl Into<String>, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            task_id: TaskId::new(),
            title: draft.title,
            description: draft.description,
            assigned_to: draft.assigned_to,
            deadline: draft.deadline,
            priority: draft.priority,
            status: TaskStatus::Pending,
            created_at: timestamp,
            updated_at: timestamp,
            created_by: created_by.into(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description. Empty when none was provided.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the assignee identifier.
    #[must_use]
    pub fn assigned_to(&self) -> &str {
        &self.assigned_to
    }

    /// Returns the deadline as stored (an ISO-8601 string).
    #[must_use]
    pub fn deadline(&self) -> &str {
        &self.deadline
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the identifier of the creating principal.
    #[must_use]
    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    /// Applies a validated patch, refreshing `updated_at` to the given
    /// timestamp.
    ///
    /// `taskId` and `createdAt` carried in the patch are ignored; those
    /// fields are immutable. Callers validate the patch values with
    /// [`TaskPatch::validate`] before applying.
    pub fn apply_patch(&mut self, patch: &TaskPatch, updated_at: DateTime<Utc>) {
        if let Some(title) = &patch.title {
            self.title.clone_from(title);
        }
        if let Some(description) = &patch.description {
            self.description.clone_from(description);
        }
        if let Some(assigned_to) = &patch.assigned_to {
            self.assigned_to.clone_from(assigned_to);
        }
        if let Some(deadline) = &patch.deadline {
            self.deadline.clone_from(deadline);
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = updated_at;
    }
}

/// Rejects a value that is empty after trimming.
fn require_non_blank(value: &str, error: TaskDomainError) -> Result<(), TaskDomainError> {
    if value.trim().is_empty() {
        return Err(error);
    }
    Ok(())
}
