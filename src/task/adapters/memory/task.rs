//! In-memory task source for tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::status::domain::{BoardId, StatusId};
use crate::task::{
    domain::{BoardTasks, Task, TaskDomainError, TaskId},
    ports::{TaskSource, TaskSourceError, TaskSourceResult},
};

/// Thread-safe in-memory task source.
///
/// Reorders go through the same position algebra as the board's local copy,
/// so positions stay dense on the "server" side too.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskSource {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    boards: HashMap<BoardId, BoardTasks>,
}

impl InMemoryTaskSource {
    /// Creates an empty in-memory source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source holding the given tasks for one board.
    #[must_use]
    pub fn with_board(board_id: BoardId, tasks: Vec<Task>) -> Self {
        let mut state = InMemoryTaskState::default();
        state.boards.insert(board_id, BoardTasks::from_tasks(tasks));
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Creates a task at the end of a column and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Persistence`] when the title is invalid or
    /// the state lock is poisoned.
    pub fn add_task(
        &self,
        board_id: BoardId,
        title: &str,
        status_id: StatusId,
    ) -> TaskSourceResult<Task> {
        let task = Task::new(title, status_id, 0).map_err(TaskSourceError::persistence)?;
        let mut state = self.state.write().map_err(|err| {
            TaskSourceError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let board = state.boards.entry(board_id).or_default();
        let location = board
            .push_task(task.clone())
            .map_err(TaskSourceError::persistence)?;
        board
            .column(location.status_id)
            .get(location.index)
            .cloned()
            .ok_or(TaskSourceError::NotFound(task.id()))
    }
}

#[async_trait]
impl TaskSource for InMemoryTaskSource {
    async fn fetch_tasks(&self, board_id: BoardId) -> TaskSourceResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskSourceError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .boards
            .get(&board_id)
            .map(|board| board.tasks().cloned().collect())
            .unwrap_or_default())
    }

    async fn reorder(
        &self,
        task_id: TaskId,
        status_id: StatusId,
        position: u32,
    ) -> TaskSourceResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskSourceError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let board = state
            .boards
            .values_mut()
            .find(|board| board.locate(task_id).is_some())
            .ok_or(TaskSourceError::NotFound(task_id))?;
        let index = usize::try_from(position).unwrap_or(usize::MAX);
        board
            .move_task(task_id, status_id, index)
            .map_err(|err| match err {
                TaskDomainError::UnknownTask(id) => TaskSourceError::NotFound(id),
                other => TaskSourceError::persistence(other),
            })?;
        Ok(())
    }
}
