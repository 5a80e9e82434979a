//! Drag session controller: drag callbacks, optimistic moves, persistence,
//! and reconciliation.

use crate::drag::domain::{
    DragError, DragGeometry, DragPhase, DragSession, DropTarget,
    collision::{highlight, resolve},
};
use crate::status::domain::{BoardId, Status, StatusId, sort_for_display};
use crate::task::{
    domain::{BoardTasks, TaskId, TaskLocation},
    ports::{TaskSource, TaskSourceError, TaskSourceResult},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use super::ColumnView;

/// A drop whose persistence call was rejected.
///
/// The controller recovers by reconciling with the task source, so this is
/// reported in the drag outcome rather than returned as an error.
#[derive(Debug, Clone, Error)]
#[error("reorder of task {task_id} was rejected: {source}")]
pub struct ReorderFailed {
    /// Task whose move was rejected.
    pub task_id: TaskId,
    /// Underlying source error.
    #[source]
    pub source: TaskSourceError,
}

/// Details of a drop that moved a task.
#[derive(Debug, Clone)]
pub struct MoveReport {
    /// Task that moved.
    pub task_id: TaskId,
    /// Location before the drag.
    pub from: TaskLocation,
    /// Location applied optimistically and sent to the source.
    pub to: TaskLocation,
    /// Set when the source rejected the move.
    pub reorder_error: Option<ReorderFailed>,
    /// Whether the post-drop refetch replaced the optimistic copy.
    pub reconciled: bool,
}

/// Result of finishing a drag.
#[derive(Debug, Clone)]
pub enum DragOutcome {
    /// Nothing changed: no target, or the task was dropped where it was.
    Unchanged,
    /// The task moved.
    Moved(MoveReport),
}

/// Drives one board's drag gestures.
///
/// The controller owns the board's in-memory task collection. Every drop
/// that changes it is persisted and then followed by a refetch, so the
/// optimistic copy is never the final state. Methods take `&mut self`,
/// which keeps gestures and commits from interleaving.
pub struct DragSessionController<S>
where
    S: TaskSource,
{
    source: Arc<S>,
    board_id: BoardId,
    board: BoardTasks,
    phase: DragPhase,
    stale: bool,
}

impl<S> DragSessionController<S>
where
    S: TaskSource,
{
    /// Creates a controller over an already-loaded task collection.
    #[must_use]
    pub const fn new(source: Arc<S>, board_id: BoardId, board: BoardTasks) -> Self {
        Self {
            source,
            board_id,
            board,
            phase: DragPhase::Idle,
            stale: false,
        }
    }

    /// Fetches a board's tasks and creates a controller for them.
    ///
    /// # Errors
    ///
    /// Returns the source error when the fetch fails.
    pub async fn load(source: Arc<S>, board_id: BoardId) -> TaskSourceResult<Self> {
        let tasks = source.fetch_tasks(board_id).await?;
        Ok(Self::new(source, board_id, BoardTasks::from_tasks(tasks)))
    }

    /// Returns the board this controller drives.
    #[must_use]
    pub const fn board_id(&self) -> BoardId {
        self.board_id
    }

    /// Returns the current task collection.
    #[must_use]
    pub const fn board(&self) -> &BoardTasks {
        &self.board
    }

    /// Returns the state machine phase.
    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Returns the task being dragged, if any.
    #[must_use]
    pub const fn active_task_id(&self) -> Option<TaskId> {
        match self.phase {
            DragPhase::Dragging(session) => Some(session.active_task_id()),
            DragPhase::Idle | DragPhase::Committing { .. } => None,
        }
    }

    /// Returns the highlighted drop column, if any.
    #[must_use]
    pub const fn over_status_id(&self) -> Option<StatusId> {
        match self.phase {
            DragPhase::Dragging(session) => session.over_status_id(),
            DragPhase::Idle | DragPhase::Committing { .. } => None,
        }
    }

    /// Returns whether the last reconciliation failed and the collection
    /// may still hold optimistic state.
    #[must_use]
    pub const fn is_stale(&self) -> bool {
        self.stale
    }

    /// Starts dragging a task.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::SessionActive`] while another drag is running or
    /// [`DragError::UnknownTask`] when the task is not on the board.
    pub fn on_drag_start(&mut self, task_id: TaskId) -> Result<(), DragError> {
        if let DragPhase::Dragging(session) = self.phase {
            return Err(DragError::SessionActive(session.active_task_id()));
        }
        let origin = self
            .board
            .locate(task_id)
            .ok_or(DragError::UnknownTask(task_id))?;
        debug!(task_id = %task_id, status_id = %origin.status_id, index = origin.index, "drag started");
        self.phase = DragPhase::Dragging(DragSession::new(task_id, origin));
        Ok(())
    }

    /// Updates the drop highlight for the latest drag geometry.
    ///
    /// The highlight is set only when the resolved column differs from the
    /// task's own column. No persistence call is made.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::NotDragging`] outside a drag.
    pub fn on_drag_over(&mut self, geometry: &DragGeometry) -> Result<Option<StatusId>, DragError> {
        let DragPhase::Dragging(mut session) = self.phase else {
            return Err(DragError::NotDragging);
        };
        let over = highlight(geometry, &self.board, session.active_task_id());
        session.set_over(over);
        self.phase = DragPhase::Dragging(session);
        Ok(over)
    }

    /// Abandons the current drag without changing anything.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::NotDragging`] outside a drag.
    pub fn on_drag_cancel(&mut self) -> Result<(), DragError> {
        let DragPhase::Dragging(session) = self.phase else {
            return Err(DragError::NotDragging);
        };
        debug!(task_id = %session.active_task_id(), "drag cancelled");
        self.phase = DragPhase::Idle;
        Ok(())
    }

    /// Finishes the drag at the given geometry.
    ///
    /// A drop outside every target, or at the task's own column and index,
    /// changes nothing and makes no call. Any other drop is applied to the
    /// local collection first, then sent to the source, then reconciled by
    /// refetching the board, whether or not the source accepted the move.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::NotDragging`] outside a drag or
    /// [`DragError::UnknownTask`] when the task left the board mid-drag.
    pub async fn on_drag_end(&mut self, geometry: &DragGeometry) -> Result<DragOutcome, DragError> {
        let DragPhase::Dragging(session) = self.phase else {
            return Err(DragError::NotDragging);
        };
        self.phase = DragPhase::Idle;
        let task_id = session.active_task_id();

        let Some(target) = resolve(geometry, &self.board, task_id) else {
            debug!(task_id = %task_id, "drag ended outside any drop target");
            return Ok(DragOutcome::Unchanged);
        };
        let from = session.origin();
        if is_same_place(from, target) {
            debug!(task_id = %task_id, "drag ended at its starting place");
            return Ok(DragOutcome::Unchanged);
        }

        let to = self
            .board
            .move_task(task_id, target.status_id, target.index)
            .map_err(|_| DragError::UnknownTask(task_id))?;
        self.phase = DragPhase::Committing { task_id };
        debug!(
            task_id = %task_id,
            from_status = %from.status_id,
            to_status = %to.status_id,
            index = to.index,
            "task moved locally"
        );

        let reorder_error = self.persist(task_id, to).await.err();
        let reconciled = match self.reconcile().await {
            Ok(()) => true,
            Err(err) => {
                warn!(board_id = %self.board_id, error = %err, "reconciliation refetch failed");
                false
            }
        };
        self.phase = DragPhase::Idle;

        Ok(DragOutcome::Moved(MoveReport {
            task_id,
            from,
            to,
            reorder_error,
            reconciled,
        }))
    }

    /// Replaces the task collection with an authoritative refetch.
    ///
    /// # Errors
    ///
    /// Returns the source error when the fetch fails; the controller is then
    /// flagged stale and keeps its current collection.
    pub async fn reconcile(&mut self) -> TaskSourceResult<()> {
        match self.source.fetch_tasks(self.board_id).await {
            Ok(tasks) => {
                self.board = BoardTasks::from_tasks(tasks);
                self.stale = false;
                Ok(())
            }
            Err(err) => {
                self.stale = true;
                Err(err)
            }
        }
    }

    /// Builds the column view models in display order.
    #[must_use]
    pub fn columns(&self, statuses: &[Status]) -> Vec<ColumnView> {
        let over = self.over_status_id();
        sort_for_display(statuses)
            .into_iter()
            .map(|status| {
                let tasks = self.board.column(status.id()).to_vec();
                let is_drop_target = over == Some(status.id());
                ColumnView::new(status, tasks, is_drop_target)
            })
            .collect()
    }

    async fn persist(&self, task_id: TaskId, to: TaskLocation) -> Result<(), ReorderFailed> {
        let position = u32::try_from(to.index).unwrap_or(u32::MAX);
        self.source
            .reorder(task_id, to.status_id, position)
            .await
            .map_err(|source| {
                warn!(task_id = %task_id, error = %source, "reorder rejected; reconciling");
                ReorderFailed { task_id, source }
            })
    }
}

fn is_same_place(from: TaskLocation, target: DropTarget) -> bool {
    from.status_id == target.status_id && from.index == target.index
}
