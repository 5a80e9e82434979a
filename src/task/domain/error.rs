//! Error types for task domain validation and board moves.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing or moving tasks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task is not on the board.
    #[error("task not found on board: {0}")]
    UnknownTask(TaskId),

    /// A task with the same identifier is already on the board.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),
}
