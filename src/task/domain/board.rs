//! In-memory task collection for one board, grouped by column.

use super::{Task, TaskDomainError, TaskId, insert_at, renumber};
use crate::status::domain::StatusId;
use serde::Serialize;
use std::collections::HashMap;

/// Column and zero-based index of a task on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TaskLocation {
    /// Column holding the task.
    pub status_id: StatusId,
    /// Index within the column.
    pub index: usize,
}

/// A board's tasks, grouped by status and kept in position order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardTasks {
    columns: HashMap<StatusId, Vec<Task>>,
}

impl BoardTasks {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups tasks by status, ordering each column by stored position.
    ///
    /// Stored positions are kept as given; the collection mirrors the
    /// source it was fetched from.
    #[must_use]
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut columns: HashMap<StatusId, Vec<Task>> = HashMap::new();
        for task in tasks {
            columns.entry(task.status_id()).or_default().push(task);
        }
        for column in columns.values_mut() {
            column.sort_by_key(Task::position);
        }
        Self { columns }
    }

    /// Returns the tasks of a column in order; empty for unknown columns.
    #[must_use]
    pub fn column(&self, status_id: StatusId) -> &[Task] {
        self.columns.get(&status_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the number of tasks in a column.
    #[must_use]
    pub fn task_count(&self, status_id: StatusId) -> usize {
        self.column(status_id).len()
    }

    /// Returns the total number of tasks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    /// Returns whether the board holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.values().all(Vec::is_empty)
    }

    /// Iterates over every task, column by column.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.columns.values().flatten()
    }

    /// Looks up a task.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks().find(|task| task.id() == task_id)
    }

    /// Finds the column and index of a task.
    #[must_use]
    pub fn locate(&self, task_id: TaskId) -> Option<TaskLocation> {
        self.columns.iter().find_map(|(status_id, column)| {
            column
                .iter()
                .position(|task| task.id() == task_id)
                .map(|index| TaskLocation {
                    status_id: *status_id,
                    index,
                })
        })
    }

    /// Appends a task to the end of its column, setting its position to the
    /// column length.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DuplicateTask`] when the task is already on
    /// the board.
    pub fn push_task(&mut self, mut task: Task) -> Result<TaskLocation, TaskDomainError> {
        if self.locate(task.id()).is_some() {
            return Err(TaskDomainError::DuplicateTask(task.id()));
        }
        let status_id = task.status_id();
        let column = self.columns.entry(status_id).or_default();
        let index = column.len();
        task.set_position(u32::try_from(index).unwrap_or(u32::MAX));
        column.push(task);
        Ok(TaskLocation { status_id, index })
    }

    /// Moves a task to `index` in `status_id`, renumbering both the source
    /// and destination columns.
    ///
    /// `index` is an index into the destination column without the moving
    /// task and is clamped to its length. Returns the task's new location.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::UnknownTask`] when the task is not on the
    /// board.
    pub fn move_task(
        &mut self,
        task_id: TaskId,
        status_id: StatusId,
        index: usize,
    ) -> Result<TaskLocation, TaskDomainError> {
        let origin = self
            .locate(task_id)
            .ok_or(TaskDomainError::UnknownTask(task_id))?;
        let mut remaining = self.columns.remove(&origin.status_id).unwrap_or_default();
        if origin.index >= remaining.len() {
            self.columns.insert(origin.status_id, remaining);
            return Err(TaskDomainError::UnknownTask(task_id));
        }
        let mut moving = remaining.remove(origin.index);

        if origin.status_id == status_id {
            self.columns.insert(status_id, remaining);
        } else {
            if !remaining.is_empty() {
                self.columns.insert(origin.status_id, renumber(remaining));
            }
            moving.set_status(status_id);
        }

        let receiving = self.columns.remove(&status_id).unwrap_or_default();
        let placed_column = insert_at(receiving, moving, index);
        let placed = placed_column
            .iter()
            .position(|candidate| candidate.id() == task_id)
            .unwrap_or_default();
        self.columns.insert(status_id, placed_column);

        Ok(TaskLocation {
            status_id,
            index: placed,
        })
    }
}
