//! In-memory status source for tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::status::{
    domain::{BoardId, Status, StatusDraft, StatusId},
    ports::{StatusSource, StatusSourceError, StatusSourceResult},
};

/// Thread-safe in-memory status source.
///
/// New statuses are appended after the board's last position; reorders
/// renumber the board densely from zero.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStatusSource {
    state: Arc<RwLock<InMemoryStatusState>>,
}

#[derive(Debug, Default)]
struct InMemoryStatusState {
    boards: HashMap<BoardId, Vec<Status>>,
}

impl InMemoryStatusState {
    fn find_mut(&mut self, id: StatusId) -> Option<&mut Status> {
        self.boards
            .values_mut()
            .flat_map(|statuses| statuses.iter_mut())
            .find(|status| status.id() == id)
    }
}

impl InMemoryStatusSource {
    /// Creates an empty in-memory source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source holding the given statuses for one board.
    #[must_use]
    pub fn with_board(board_id: BoardId, statuses: Vec<Status>) -> Self {
        let mut state = InMemoryStatusState::default();
        state.boards.insert(board_id, statuses);
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    fn read(&self) -> StatusSourceResult<RwLockReadGuard<'_, InMemoryStatusState>> {
        self.state.read().map_err(|err| {
            StatusSourceError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> StatusSourceResult<RwLockWriteGuard<'_, InMemoryStatusState>> {
        self.state.write().map_err(|err| {
            StatusSourceError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl StatusSource for InMemoryStatusSource {
    async fn fetch_statuses(&self, board_id: BoardId) -> StatusSourceResult<Vec<Status>> {
        let state = self.read()?;
        let mut statuses = state.boards.get(&board_id).cloned().unwrap_or_default();
        statuses.sort_by_key(Status::position);
        Ok(statuses)
    }

    async fn create_status(
        &self,
        board_id: BoardId,
        draft: &StatusDraft,
    ) -> StatusSourceResult<Status> {
        let mut state = self.write()?;
        let statuses = state.boards.entry(board_id).or_default();
        let position = statuses
            .iter()
            .map(Status::position)
            .max()
            .map_or(0, |last| last.saturating_add(1));
        let status = Status::new(
            StatusId::new(),
            draft.name.clone(),
            draft.color.clone(),
            position,
            false,
        );
        statuses.push(status.clone());
        Ok(status)
    }

    async fn update_status(&self, id: StatusId, draft: &StatusDraft) -> StatusSourceResult<Status> {
        let mut state = self.write()?;
        let status = state.find_mut(id).ok_or(StatusSourceError::NotFound(id))?;
        status.set_appearance(draft.name.clone(), draft.color.clone());
        Ok(status.clone())
    }

    async fn delete_status(&self, id: StatusId) -> StatusSourceResult<()> {
        let mut state = self.write()?;
        for statuses in state.boards.values_mut() {
            if let Some(index) = statuses.iter().position(|status| status.id() == id) {
                statuses.remove(index);
                return Ok(());
            }
        }
        Err(StatusSourceError::NotFound(id))
    }

    async fn reorder_statuses(
        &self,
        board_id: BoardId,
        ordered_ids: &[StatusId],
    ) -> StatusSourceResult<()> {
        let mut state = self.write()?;
        let statuses = state
            .boards
            .get_mut(&board_id)
            .ok_or(StatusSourceError::BoardNotFound(board_id))?;

        let names_every_status = ordered_ids.len() == statuses.len()
            && statuses.iter().all(|status| ordered_ids.contains(&status.id()));
        if !names_every_status {
            return Err(StatusSourceError::OrderMismatch(board_id));
        }

        for status in statuses.iter_mut() {
            if let Some(position) = (0_u32..)
                .zip(ordered_ids)
                .find_map(|(position, id)| (*id == status.id()).then_some(position))
            {
                status.set_position(position);
            }
        }
        statuses.sort_by_key(Status::position);
        Ok(())
    }
}
