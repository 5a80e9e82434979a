//! Source port for fetching board tasks and persisting their order.

use crate::status::domain::{BoardId, StatusId};
use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task source operations.
pub type TaskSourceResult<T> = Result<T, TaskSourceError>;

/// Task list and ordering persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Returns every task on a board with authoritative positions.
    async fn fetch_tasks(&self, board_id: BoardId) -> TaskSourceResult<Vec<Task>>;

    /// Moves a task to `position` in `status_id`.
    ///
    /// The source renumbers both affected columns. `position` is an index
    /// into the destination column without the moving task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::NotFound`] when the task does not exist.
    async fn reorder(
        &self,
        task_id: TaskId,
        status_id: StatusId,
        position: u32,
    ) -> TaskSourceResult<()>;
}

/// Errors returned by task source implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskSourceError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskSourceError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
