//! Staged, reversible editing of a board's status set.
//!
//! A [`StatusEditSession`] holds a working copy of the statuses. Every
//! operation is synchronous and validated locally; nothing reaches the
//! status source until the session is turned into a [`CommitPlan`] and
//! executed by the batch service.

use super::{
    BoardId, Status, StatusColor, StatusDraft, StatusEditConfig, StatusEditError, StatusId,
    StatusName, ordering::display_order_with, sort_for_collision, terminal_status_id,
};
use serde::Serialize;
use tracing::debug;

/// Edit state of a staged status record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EditState {
    /// Matches the status as loaded.
    Unchanged,
    /// Created in this session and unknown to the status source.
    Added,
    /// Existing status whose name, color, or position changed.
    Modified,
    /// Existing status staged for deletion.
    Deleted {
        /// Whether the record was modified before deletion was requested.
        modified: bool,
    },
}

impl EditState {
    /// State after a name, color, or position change.
    const fn touched(self) -> Self {
        match self {
            Self::Added => Self::Added,
            Self::Unchanged | Self::Modified => Self::Modified,
            Self::Deleted { .. } => Self::Deleted { modified: true },
        }
    }
}

/// A status record in an edit session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalStatus {
    #[serde(flatten)]
    status: Status,
    #[serde(flatten)]
    state: EditState,
}

impl LocalStatus {
    const fn new(status: Status, state: EditState) -> Self {
        Self { status, state }
    }

    /// Returns the staged status values.
    #[must_use]
    pub const fn status(&self) -> &Status {
        &self.status
    }

    /// Returns the status identifier (provisional for added records).
    #[must_use]
    pub const fn id(&self) -> StatusId {
        self.status.id()
    }

    /// Returns the staged position.
    #[must_use]
    pub const fn position(&self) -> u32 {
        self.status.position()
    }

    /// Returns the edit state.
    #[must_use]
    pub const fn state(&self) -> EditState {
        self.state
    }

    /// Returns whether the record was added in this session.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        matches!(self.state, EditState::Added)
    }

    /// Returns whether the record is staged for deletion.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        matches!(self.state, EditState::Deleted { .. })
    }

    /// Returns whether an existing record has pending changes.
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        matches!(
            self.state,
            EditState::Modified | EditState::Deleted { modified: true }
        )
    }
}

impl AsRef<Status> for LocalStatus {
    fn as_ref(&self) -> &Status {
        &self.status
    }
}

/// Ordered persistence calls derived from an edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitPlan {
    /// Board the statuses belong to.
    pub board_id: BoardId,
    /// Existing statuses to delete.
    pub deletions: Vec<StatusId>,
    /// Statuses to create, keyed by their provisional identifier.
    pub creations: Vec<(StatusId, StatusDraft)>,
    /// Existing statuses whose name and color are sent again.
    pub updates: Vec<(StatusId, StatusDraft)>,
    /// Full live ordering by position; added records carry provisional ids.
    pub final_order: Vec<StatusId>,
    /// Whether `final_order` differs from the loaded ordering once deleted
    /// statuses are removed from it.
    pub reorder_required: bool,
}

impl CommitPlan {
    /// Returns whether executing the plan would issue no calls.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deletions.is_empty()
            && self.creations.is_empty()
            && self.updates.is_empty()
            && !self.reorder_required
    }
}

/// Working copy of a board's statuses with staged edits.
#[derive(Debug, Clone)]
pub struct StatusEditSession {
    board_id: BoardId,
    config: StatusEditConfig,
    records: Vec<LocalStatus>,
    terminal_id: Option<StatusId>,
    initial_order: Vec<StatusId>,
    loaded: Vec<Status>,
}

impl StatusEditSession {
    /// Stages a board's statuses for editing.
    #[must_use]
    pub fn stage(board_id: BoardId, statuses: &[Status], config: StatusEditConfig) -> Self {
        let terminal_id = terminal_status_id(statuses);
        let initial_order = sort_for_collision(statuses)
            .iter()
            .map(Status::id)
            .collect();
        let records = statuses
            .iter()
            .cloned()
            .map(|status| LocalStatus::new(status, EditState::Unchanged))
            .collect();

        Self {
            board_id,
            config,
            records,
            terminal_id,
            initial_order,
            loaded: statuses.to_vec(),
        }
    }

    /// Returns the board being edited.
    #[must_use]
    pub const fn board_id(&self) -> BoardId {
        self.board_id
    }

    /// Returns the terminal status identifier, if the board has one.
    #[must_use]
    pub const fn terminal_id(&self) -> Option<StatusId> {
        self.terminal_id
    }

    /// Returns every staged record, deleted ones included, in display order.
    #[must_use]
    pub fn statuses(&self) -> Vec<&LocalStatus> {
        let refs: Vec<&LocalStatus> = self.records.iter().collect();
        display_order_with(&refs, self.terminal_id)
    }

    /// Looks up a staged record.
    #[must_use]
    pub fn record(&self, id: StatusId) -> Option<&LocalStatus> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Returns whether any record differs from the loaded state.
    #[must_use]
    pub fn has_pending_changes(&self) -> bool {
        self.records
            .iter()
            .any(|record| record.state != EditState::Unchanged)
    }

    /// Stages a new status just before the terminal status, or after the
    /// last status when the board has none.
    ///
    /// Records at or after the insertion point shift by one and are marked
    /// modified.
    ///
    /// # Errors
    ///
    /// Returns [`StatusEditError::TooManyStatuses`] at the configured limit
    /// or [`StatusEditError::Domain`] for an invalid name or color.
    pub fn add_status(&mut self, name: &str, color: &str) -> Result<StatusId, StatusEditError> {
        if self.live_count() >= self.config.max_statuses {
            return Err(StatusEditError::TooManyStatuses {
                max: self.config.max_statuses,
            });
        }
        let name = StatusName::bounded(name, self.config.max_name_length)?;
        let color = StatusColor::new(color)?;

        let insert_position = self.insertion_position();
        for record in &mut self.records {
            if record.position() >= insert_position {
                record
                    .status
                    .set_position(record.position().saturating_add(1));
                record.state = record.state.touched();
            }
        }

        let id = StatusId::new();
        let status = Status::new(id, name, color, insert_position, false);
        debug!(status_id = %id, position = insert_position, "staged new status");
        self.records.push(LocalStatus::new(status, EditState::Added));
        Ok(id)
    }

    /// Changes a status's name and color.
    ///
    /// # Errors
    ///
    /// Returns [`StatusEditError::StatusNotFound`],
    /// [`StatusEditError::TerminalStatusLocked`],
    /// [`StatusEditError::StatusDeleted`], or a validation error.
    pub fn rename_or_recolor(
        &mut self,
        id: StatusId,
        name: &str,
        color: &str,
    ) -> Result<(), StatusEditError> {
        self.ensure_editable(id)?;
        let name = StatusName::bounded(name, self.config.max_name_length)?;
        let color = StatusColor::new(color)?;

        let record = self.record_mut(id)?;
        record.status.set_appearance(name, color);
        record.state = record.state.touched();
        Ok(())
    }

    /// Requests deletion of a status holding `task_count` live tasks.
    ///
    /// Added records are discarded outright, closing the gap they opened so
    /// that records shifted only by the addition match their loaded values
    /// again. Existing ones are flagged and can be restored with
    /// [`Self::undo_delete`]. A rejected request leaves the staged list
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns, in order of precedence,
    /// [`StatusEditError::CannotDeleteTerminal`],
    /// [`StatusEditError::CannotDeleteLast`], or
    /// [`StatusEditError::StatusNotEmpty`].
    pub fn request_delete(&mut self, id: StatusId, task_count: usize) -> Result<(), StatusEditError> {
        let index = self
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(StatusEditError::StatusNotFound(id))?;
        if self.terminal_id == Some(id) {
            return Err(StatusEditError::CannotDeleteTerminal(id));
        }
        let state = self
            .records
            .get(index)
            .map(LocalStatus::state)
            .ok_or(StatusEditError::StatusNotFound(id))?;
        if matches!(state, EditState::Deleted { .. }) {
            return Ok(());
        }
        if self.live_count() <= 1 {
            return Err(StatusEditError::CannotDeleteLast);
        }
        if task_count > 0 {
            return Err(StatusEditError::StatusNotEmpty { id, task_count });
        }

        if state == EditState::Added {
            let removed = self.records.remove(index);
            self.close_gap(removed.position());
            debug!(status_id = %id, "discarded staged status");
        } else {
            let record = self.record_mut(id)?;
            record.state = EditState::Deleted {
                modified: state == EditState::Modified,
            };
            debug!(status_id = %id, "staged status deletion");
        }
        Ok(())
    }

    /// Restores a status staged for deletion.
    ///
    /// Records that are not deleted are left as they are.
    ///
    /// # Errors
    ///
    /// Returns [`StatusEditError::StatusNotFound`] when the record is not in
    /// the session.
    pub fn undo_delete(&mut self, id: StatusId) -> Result<(), StatusEditError> {
        let record = self.record_mut(id)?;
        if let EditState::Deleted { modified } = record.state {
            record.state = if modified {
                EditState::Modified
            } else {
                EditState::Unchanged
            };
        }
        Ok(())
    }

    /// Swaps the positions of two statuses.
    ///
    /// # Errors
    ///
    /// Returns [`StatusEditError::StatusNotFound`],
    /// [`StatusEditError::TerminalStatusLocked`], or
    /// [`StatusEditError::StatusDeleted`] for either identifier.
    pub fn reorder(&mut self, dragged_id: StatusId, target_id: StatusId) -> Result<(), StatusEditError> {
        self.ensure_editable(dragged_id)?;
        self.ensure_editable(target_id)?;
        if dragged_id == target_id {
            return Ok(());
        }

        let dragged_position = self.record_mut(dragged_id)?.position();
        let target_position = self.record_mut(target_id)?.position();
        for (id, position) in [(dragged_id, target_position), (target_id, dragged_position)] {
            let record = self.record_mut(id)?;
            record.status.set_position(position);
            record.state = record.state.touched();
        }
        Ok(())
    }

    fn close_gap(&mut self, position: u32) {
        for record in &mut self.records {
            if record.position() > position {
                record
                    .status
                    .set_position(record.position().saturating_sub(1));
            }
            if record.is_new() {
                continue;
            }
            let matches_loaded = self
                .loaded
                .iter()
                .any(|loaded| loaded == &record.status);
            if matches_loaded {
                record.state = match record.state {
                    EditState::Modified => EditState::Unchanged,
                    EditState::Deleted { .. } => EditState::Deleted { modified: false },
                    other => other,
                };
            }
        }
    }

    /// Derives the ordered persistence calls for the staged edits.
    #[must_use]
    pub fn plan(&self) -> CommitPlan {
        let deletions: Vec<StatusId> = self
            .records
            .iter()
            .filter(|record| record.is_deleted())
            .map(LocalStatus::id)
            .collect();
        let creations = self
            .records
            .iter()
            .filter(|record| record.is_new())
            .map(|record| (record.id(), record.status.to_draft()))
            .collect();
        let updates = self
            .records
            .iter()
            .filter(|record| record.state == EditState::Modified)
            .map(|record| (record.id(), record.status.to_draft()))
            .collect();

        let live: Vec<&LocalStatus> = self
            .records
            .iter()
            .filter(|record| !record.is_deleted())
            .collect();
        let final_order: Vec<StatusId> = sort_for_collision(&live)
            .into_iter()
            .map(LocalStatus::id)
            .collect();
        let initial_live: Vec<StatusId> = self
            .initial_order
            .iter()
            .copied()
            .filter(|id| !deletions.contains(id))
            .collect();
        let reorder_required = final_order != initial_live;

        CommitPlan {
            board_id: self.board_id,
            deletions,
            creations,
            updates,
            final_order,
            reorder_required,
        }
    }

    fn live_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| !record.is_deleted())
            .count()
    }

    fn insertion_position(&self) -> u32 {
        let terminal_position = self
            .terminal_id
            .and_then(|id| self.record(id))
            .map(LocalStatus::position);
        terminal_position.unwrap_or_else(|| {
            self.records
                .iter()
                .map(LocalStatus::position)
                .max()
                .map_or(0, |last| last.saturating_add(1))
        })
    }

    fn ensure_editable(&self, id: StatusId) -> Result<(), StatusEditError> {
        let record = self.record(id).ok_or(StatusEditError::StatusNotFound(id))?;
        if self.terminal_id == Some(id) {
            return Err(StatusEditError::TerminalStatusLocked(id));
        }
        if record.is_deleted() {
            return Err(StatusEditError::StatusDeleted(id));
        }
        Ok(())
    }

    fn record_mut(&mut self, id: StatusId) -> Result<&mut LocalStatus, StatusEditError> {
        self.records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(StatusEditError::StatusNotFound(id))
    }
}
