//! Domain model for board statuses.
//!
//! Statuses are the ordered columns of a board. One of them may be the
//! terminal (done) column, which always displays last. The staged editor in
//! [`StatusEditSession`] validates batch edits before any of them reach the
//! status source.

mod config;
mod editor;
mod error;
mod ids;
mod ordering;
mod status;

pub use config::{StatusEditConfig, StatusEditConfigError};
pub use editor::{CommitPlan, EditState, LocalStatus, StatusEditSession};
pub use error::{StatusDomainError, StatusEditError};
pub use ids::{BoardId, StatusColor, StatusId, StatusName};
pub use ordering::{sort_for_collision, sort_for_display, terminal_status, terminal_status_id};
pub use status::{Status, StatusDraft};
