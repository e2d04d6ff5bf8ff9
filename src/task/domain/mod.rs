//! Domain model for the task-assignment core.
//!
//! The task domain models task creation, role-gated partial updates, and the
//! immutability rules around identifiers and creation metadata, keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod patch;
mod task;

pub use error::{ParsePriorityError, ParseStatusError, TaskDomainError};
pub use ids::TaskId;
pub use patch::TaskPatch;
pub use task::{Task, TaskDraft, TaskPriority, TaskStatus};
