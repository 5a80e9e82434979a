//! Persistence port for board statuses.

use crate::status::domain::{BoardId, Status, StatusDraft, StatusId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for status source operations.
pub type StatusSourceResult<T> = Result<T, StatusSourceError>;

/// Status persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Returns every status of a board in stored order.
    async fn fetch_statuses(&self, board_id: BoardId) -> StatusSourceResult<Vec<Status>>;

    /// Creates a status; the source assigns its identifier and position.
    async fn create_status(
        &self,
        board_id: BoardId,
        draft: &StatusDraft,
    ) -> StatusSourceResult<Status>;

    /// Replaces a status's name and color.
    ///
    /// # Errors
    ///
    /// Returns [`StatusSourceError::NotFound`] when the status does not
    /// exist.
    async fn update_status(&self, id: StatusId, draft: &StatusDraft) -> StatusSourceResult<Status>;

    /// Deletes a status.
    ///
    /// # Errors
    ///
    /// Returns [`StatusSourceError::NotFound`] when the status does not
    /// exist.
    async fn delete_status(&self, id: StatusId) -> StatusSourceResult<()>;

    /// Rewrites the board's status positions to follow `ordered_ids`.
    ///
    /// # Errors
    ///
    /// Returns [`StatusSourceError::OrderMismatch`] when the list does not
    /// name exactly the board's statuses.
    async fn reorder_statuses(
        &self,
        board_id: BoardId,
        ordered_ids: &[StatusId],
    ) -> StatusSourceResult<()>;
}

/// Errors returned by status source implementations.
#[derive(Debug, Clone, Error)]
pub enum StatusSourceError {
    /// The status was not found.
    #[error("status not found: {0}")]
    NotFound(StatusId),

    /// The board was not found.
    #[error("board not found: {0}")]
    BoardNotFound(BoardId),

    /// A reorder request did not list exactly the board's statuses.
    #[error("reorder list does not match the statuses of board {0}")]
    OrderMismatch(BoardId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StatusSourceError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
