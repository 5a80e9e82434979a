//! Drag gesture state machine.

use crate::status::domain::StatusId;
use crate::task::domain::{TaskId, TaskLocation};
use thiserror::Error;

/// Transient state of one drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    active_task_id: TaskId,
    origin: TaskLocation,
    over_status_id: Option<StatusId>,
}

impl DragSession {
    /// Starts a session for a task at its pre-drag location.
    #[must_use]
    pub const fn new(active_task_id: TaskId, origin: TaskLocation) -> Self {
        Self {
            active_task_id,
            origin,
            over_status_id: None,
        }
    }

    /// Returns the dragged task.
    #[must_use]
    pub const fn active_task_id(&self) -> TaskId {
        self.active_task_id
    }

    /// Returns where the task sat when the drag started.
    #[must_use]
    pub const fn origin(&self) -> TaskLocation {
        self.origin
    }

    /// Returns the highlighted column, if any.
    #[must_use]
    pub const fn over_status_id(&self) -> Option<StatusId> {
        self.over_status_id
    }

    pub(crate) const fn set_over(&mut self, over_status_id: Option<StatusId>) {
        self.over_status_id = over_status_id;
    }
}

/// Phase of the drag controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A task is being dragged.
    Dragging(DragSession),
    /// The drop was applied locally and is being persisted and reconciled.
    ///
    /// Only held while `on_drag_end` is awaiting the task source; callers
    /// holding the controller never see it between calls.
    Committing {
        /// Task being persisted.
        task_id: TaskId,
    },
}

/// Misuse of the drag state machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DragError {
    /// The task is not on the board.
    #[error("task {0} is not on the board")]
    UnknownTask(TaskId),

    /// Another drag is already in progress.
    #[error("a drag of task {0} is already in progress")]
    SessionActive(TaskId),

    /// No drag is in progress.
    #[error("no drag is in progress")]
    NotDragging,
}
