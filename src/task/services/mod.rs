//! Application services for task-assignment orchestration.

mod board;

pub use board::{CreateTaskInput, TaskBoardError, TaskBoardResult, TaskBoardService};
