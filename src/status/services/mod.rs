//! Application services for staged status editing.

mod batch;

pub use batch::{
    CommitStage, CommitSummary, StatusBatchService, StatusCommitError, StatusCommitResult,
};
