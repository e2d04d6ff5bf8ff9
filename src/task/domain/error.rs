//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or patching domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("title must not be empty")]
    EmptyTitle,

    /// The assignee identifier is empty after trimming.
    #[error("assignedTo must not be empty")]
    EmptyAssignee,

    /// The deadline value is empty after trimming.
    #[error("deadline must not be empty")]
    EmptyDeadline,
}

/// Error returned while parsing task statuses from their wire form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseStatusError(pub String);

/// Error returned while parsing task priorities from their wire form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
