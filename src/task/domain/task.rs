//! Task card record.

use super::{TaskDomainError, TaskId};
use crate::status::domain::StatusId;
use serde::{Deserialize, Serialize};

/// A task card placed in a status column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    status_id: StatusId,
    position: u32,
    title: String,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Column the task belongs to.
    pub status_id: StatusId,
    /// Rank within the column.
    pub position: u32,
    /// Display title.
    pub title: String,
}

impl Task {
    /// Creates a new task at `position` in the given column.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn new(
        title: impl Into<String>,
        status_id: StatusId,
        position: u32,
    ) -> Result<Self, TaskDomainError> {
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self {
            id: TaskId::new(),
            status_id,
            position,
            title: trimmed.to_owned(),
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            status_id: data.status_id,
            position: data.position,
            title: data.title,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the column the task belongs to.
    #[must_use]
    pub const fn status_id(&self) -> StatusId {
        self.status_id
    }

    /// Returns the rank within the column.
    #[must_use]
    pub const fn position(&self) -> u32 {
        self.position
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub(crate) const fn set_position(&mut self, position: u32) {
        self.position = position;
    }

    pub(crate) const fn set_status(&mut self, status_id: StatusId) {
        self.status_id = status_id;
    }
}
