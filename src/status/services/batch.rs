//! Service layer for committing staged status edits.

use crate::status::{
    domain::{
        BoardId, CommitPlan, Status, StatusEditConfig, StatusEditSession, StatusId,
        sort_for_display,
    },
    ports::{StatusSource, StatusSourceError, StatusSourceResult},
};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Step of a commit during which a persistence call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitStage {
    /// Deleting statuses staged for deletion.
    Delete,
    /// Creating statuses added in the session.
    Create,
    /// Sending modified names and colors.
    Update,
    /// Sending the full status ordering.
    Reorder,
}

impl CommitStage {
    /// Returns a lowercase label for logs and messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Create => "create",
            Self::Update => "update",
            Self::Reorder => "reorder",
        }
    }
}

impl fmt::Display for CommitStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned while committing a status edit session.
///
/// Calls applied before the failure are not rolled back; callers reload the
/// authoritative statuses with [`StatusBatchService::reload`].
#[derive(Debug, Error)]
pub enum StatusCommitError {
    /// A persistence call was rejected.
    #[error("status changes could not be saved ({stage} step failed): {source}")]
    CommitFailed {
        /// Step that failed.
        stage: CommitStage,
        /// Underlying source error.
        #[source]
        source: StatusSourceError,
    },
}

impl StatusCommitError {
    fn at(stage: CommitStage) -> impl FnOnce(StatusSourceError) -> Self {
        move |source| Self::CommitFailed { stage, source }
    }
}

/// Result type for status commits.
pub type StatusCommitResult<T> = Result<T, StatusCommitError>;

/// Calls issued by a successful commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitSummary {
    /// Number of statuses deleted.
    pub deleted: usize,
    /// Statuses created, as returned by the source.
    pub created: Vec<Status>,
    /// Number of statuses updated.
    pub updated: usize,
    /// Whether a full reorder call was issued.
    pub reordered: bool,
}

/// Status batch editing orchestration service.
#[derive(Clone)]
pub struct StatusBatchService<S>
where
    S: StatusSource,
{
    source: Arc<S>,
    config: StatusEditConfig,
}

impl<S> StatusBatchService<S>
where
    S: StatusSource,
{
    /// Creates a new batch service.
    #[must_use]
    pub const fn new(source: Arc<S>, config: StatusEditConfig) -> Self {
        Self { source, config }
    }

    /// Returns the edit limits applied to staged sessions.
    #[must_use]
    pub const fn config(&self) -> &StatusEditConfig {
        &self.config
    }

    /// Stages already-loaded statuses for editing.
    #[must_use]
    pub fn stage(&self, board_id: BoardId, statuses: &[Status]) -> StatusEditSession {
        StatusEditSession::stage(board_id, statuses, self.config.clone())
    }

    /// Fetches a board's statuses and stages them for editing.
    ///
    /// # Errors
    ///
    /// Returns the source error when the fetch fails.
    pub async fn load(&self, board_id: BoardId) -> StatusSourceResult<StatusEditSession> {
        let statuses = self.source.fetch_statuses(board_id).await?;
        Ok(self.stage(board_id, &statuses))
    }

    /// Fetches the authoritative statuses in display order.
    ///
    /// # Errors
    ///
    /// Returns the source error when the fetch fails.
    pub async fn reload(&self, board_id: BoardId) -> StatusSourceResult<Vec<Status>> {
        let statuses = self.source.fetch_statuses(board_id).await?;
        Ok(sort_for_display(&statuses))
    }

    /// Commits a session's staged edits.
    ///
    /// Calls run in a fixed order: deletions, creations, updates, then one
    /// reorder call when the live ordering changed. The first rejected call
    /// aborts the commit.
    ///
    /// # Errors
    ///
    /// Returns [`StatusCommitError::CommitFailed`] naming the failing step.
    pub async fn commit(&self, session: StatusEditSession) -> StatusCommitResult<CommitSummary> {
        let plan = session.plan();
        if plan.is_empty() {
            debug!(board_id = %plan.board_id, "status commit skipped, nothing staged");
            return Ok(CommitSummary::default());
        }

        let result = self.execute(&plan).await;
        match &result {
            Ok(summary) => info!(
                board_id = %plan.board_id,
                deleted = summary.deleted,
                created = summary.created.len(),
                updated = summary.updated,
                reordered = summary.reordered,
                "status changes committed"
            ),
            Err(StatusCommitError::CommitFailed { stage, source }) => warn!(
                board_id = %plan.board_id,
                %stage,
                error = %source,
                "status commit failed; applied changes are not rolled back"
            ),
        }
        result
    }

    async fn execute(&self, plan: &CommitPlan) -> StatusCommitResult<CommitSummary> {
        let mut summary = CommitSummary::default();

        for id in &plan.deletions {
            debug!(status_id = %id, "deleting status");
            self.source
                .delete_status(*id)
                .await
                .map_err(StatusCommitError::at(CommitStage::Delete))?;
            summary.deleted += 1;
        }

        let mut assigned_ids: HashMap<StatusId, StatusId> = HashMap::new();
        for (provisional_id, draft) in &plan.creations {
            debug!(status_id = %provisional_id, name = %draft.name, "creating status");
            let created = self
                .source
                .create_status(plan.board_id, draft)
                .await
                .map_err(StatusCommitError::at(CommitStage::Create))?;
            assigned_ids.insert(*provisional_id, created.id());
            summary.created.push(created);
        }

        for (id, draft) in &plan.updates {
            debug!(status_id = %id, "updating status");
            self.source
                .update_status(*id, draft)
                .await
                .map_err(StatusCommitError::at(CommitStage::Update))?;
            summary.updated += 1;
        }

        if plan.reorder_required {
            let ordered_ids: Vec<StatusId> = plan
                .final_order
                .iter()
                .map(|id| assigned_ids.get(id).copied().unwrap_or(*id))
                .collect();
            debug!(board_id = %plan.board_id, count = ordered_ids.len(), "reordering statuses");
            self.source
                .reorder_statuses(plan.board_id, &ordered_ids)
                .await
                .map_err(StatusCommitError::at(CommitStage::Reorder))?;
            summary.reordered = true;
        }

        Ok(summary)
    }
}
