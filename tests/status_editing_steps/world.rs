//! Shared world state for status editing BDD scenarios.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use corkboard::status::{
    adapters::memory::InMemoryStatusSource,
    domain::{
        BoardId, Status, StatusColor, StatusDraft, StatusEditConfig, StatusEditError,
        StatusEditSession, StatusId, StatusName,
    },
    ports::{StatusSource, StatusSourceError, StatusSourceResult},
    services::{CommitSummary, StatusBatchService, StatusCommitError},
};
use rstest::fixture;

/// In-memory status source that records the order of mutating calls.
#[derive(Default)]
pub struct RecordingStatusSource {
    pub inner: InMemoryStatusSource,
    pub calls: Mutex<Vec<&'static str>>,
}

impl RecordingStatusSource {
    fn record(&self, call: &'static str) -> StatusSourceResult<()> {
        self.calls
            .lock()
            .map_err(|err| StatusSourceError::persistence(std::io::Error::other(err.to_string())))?
            .push(call);
        Ok(())
    }

    /// Returns the recorded mutating calls.
    pub fn recorded(&self) -> Result<Vec<&'static str>, eyre::Report> {
        let calls = self
            .calls
            .lock()
            .map_err(|err| eyre::eyre!("call log poisoned: {err}"))?;
        Ok(calls.clone())
    }
}

#[async_trait]
impl StatusSource for RecordingStatusSource {
    async fn fetch_statuses(&self, board_id: BoardId) -> StatusSourceResult<Vec<Status>> {
        self.inner.fetch_statuses(board_id).await
    }

    async fn create_status(
        &self,
        board_id: BoardId,
        draft: &StatusDraft,
    ) -> StatusSourceResult<Status> {
        self.record("create")?;
        self.inner.create_status(board_id, draft).await
    }

    async fn update_status(&self, id: StatusId, draft: &StatusDraft) -> StatusSourceResult<Status> {
        self.record("update")?;
        self.inner.update_status(id, draft).await
    }

    async fn delete_status(&self, id: StatusId) -> StatusSourceResult<()> {
        self.record("delete")?;
        self.inner.delete_status(id).await
    }

    async fn reorder_statuses(
        &self,
        board_id: BoardId,
        ordered_ids: &[StatusId],
    ) -> StatusSourceResult<()> {
        self.record("reorder")?;
        self.inner.reorder_statuses(board_id, ordered_ids).await
    }
}

/// Scenario world for status editing behaviour tests.
pub struct StatusEditingWorld {
    pub board_id: BoardId,
    pub source: Arc<RecordingStatusSource>,
    pub service: StatusBatchService<RecordingStatusSource>,
    pub seeded: Vec<Status>,
    pub task_counts: HashMap<StatusId, usize>,
    pub session: Option<StatusEditSession>,
    pub last_edit: Option<Result<(), StatusEditError>>,
    pub last_commit: Option<Result<CommitSummary, StatusCommitError>>,
}

impl StatusEditingWorld {
    /// Creates a world with an empty board.
    #[must_use]
    pub fn new() -> Self {
        let source = Arc::new(RecordingStatusSource::default());
        Self {
            board_id: BoardId::new(),
            service: StatusBatchService::new(Arc::clone(&source), StatusEditConfig::default()),
            source,
            seeded: Vec::new(),
            task_counts: HashMap::new(),
            session: None,
            last_edit: None,
            last_commit: None,
        }
    }

    /// Records a seeded column at the next position.
    pub fn seed_status(&mut self, name: &str, is_done: bool) -> Result<(), eyre::Report> {
        let position = u32::try_from(self.seeded.len())?;
        self.seeded.push(Status::new(
            StatusId::new(),
            StatusName::new(name)?,
            StatusColor::new("#e2e8f0")?,
            position,
            is_done,
        ));
        Ok(())
    }

    /// Stores the seeded columns in a fresh source.
    pub fn publish_seeded(&mut self) {
        let source = Arc::new(RecordingStatusSource {
            inner: InMemoryStatusSource::with_board(self.board_id, self.seeded.clone()),
            calls: Mutex::new(Vec::new()),
        });
        self.service = StatusBatchService::new(Arc::clone(&source), StatusEditConfig::default());
        self.source = source;
    }

    /// Looks up a seeded or staged column by name.
    pub fn status_id(&self, name: &str) -> Result<StatusId, eyre::Report> {
        let staged = self.session.as_ref().and_then(|session| {
            session
                .statuses()
                .into_iter()
                .find(|record| record.status().name().as_str() == name)
                .map(|record| record.id())
        });
        staged
            .or_else(|| {
                self.seeded
                    .iter()
                    .find(|status| status.name().as_str() == name)
                    .map(Status::id)
            })
            .ok_or_else(|| eyre::eyre!("unknown column {name}"))
    }

    /// Returns the edit session, loading it on first use.
    pub fn session(&mut self) -> Result<&mut StatusEditSession, eyre::Report> {
        if self.session.is_none() {
            let loaded = run_async(self.service.load(self.board_id))?;
            self.session = Some(loaded);
        }
        self.session
            .as_mut()
            .ok_or_else(|| eyre::eyre!("edit session was not loaded"))
    }
}

impl Default for StatusEditingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StatusEditingWorld {
    StatusEditingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
