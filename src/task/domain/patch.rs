//! Allow-listed partial update for a task record.

use super::{TaskDomainError, TaskPriority, TaskStatus};
use serde::Deserialize;
use serde_json::Value;

/// Partial update over the patchable task fields.
///
/// The struct is an explicit allow-list: unknown keys are rejected at
/// deserialization. `taskId` and `createdAt` are accepted so that clients
/// echoing a full record do not fail, but they are never applied; their
/// presence still counts when deciding whether a non-admin patch touches
/// anything beyond `status`. A JSON `null` value is treated as an absent key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TaskPatch {
    /// Replacement title, admin only.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description, admin only.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement assignee, admin only.
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// Replacement deadline (ISO-8601 string), admin only.
    #[serde(default)]
    pub deadline: Option<String>,
    /// Replacement priority, admin only.
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    /// Replacement status; the only field a non-admin assignee may patch.
    #[serde(default)]
    pub status: Option<TaskStatus>,
    /// Accepted but never applied; the task identifier is immutable.
    #[serde(default)]
    pub task_id: Option<Value>,
    /// Accepted but never applied; the creation timestamp is immutable.
    #[serde(default)]
    pub created_at: Option<Value>,
}

impl TaskPatch {
    /// Creates a status-only patch.
    #[must_use]
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Returns the wire names of every key present in the patch, including
    /// the ignored immutable ones.
    #[must_use]
    pub fn present_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.title.is_some() {
            fields.push("title");
        }
        if self.description.is_some() {
            fields.push("description");
        }
        if self.assigned_to.is_some() {
            fields.push("assignedTo");
        }
        if self.deadline.is_some() {
            fields.push("deadline");
        }
        if self.priority.is_some() {
            fields.push("priority");
        }
        if self.status.is_some() {
            fields.push("status");
        }
        if self.task_id.is_some() {
            fields.push("taskId");
        }
        if self.created_at.is_some() {
            fields.push("createdAt");
        }
        fields
    }

    /// Returns `true` when no key other than `status` is present.
    ///
    /// An empty patch is status-only: it applies nothing but still refreshes
    /// `updatedAt`, matching the observed update semantics.
    #[must_use]
    pub fn is_status_only(&self) -> bool {
        self.present_fields().iter().all(|field| *field == "status")
    }

    /// Validates the patched values against the task field invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when a present `title`, `assignedTo`, or
    /// `deadline` value is empty after trimming; those fields are required
    /// non-empty on every persisted record.
    pub fn validate(&self) -> Result<(), TaskDomainError> {
        if blank(self.title.as_deref()) {
            return Err(TaskDomainError::EmptyTitle);
        }
        if blank(self.assigned_to.as_deref()) {
            return Err(TaskDomainError::EmptyAssignee);
        }
        if blank(self.deadline.as_deref()) {
            return Err(TaskDomainError::EmptyDeadline);
        }
        Ok(())
    }
}

/// Returns `true` when a present value is empty after trimming.
fn blank(value: Option<&str>) -> bool {
    value.is_some_and(|raw| raw.trim().is_empty())
}
