//! View models exposed to the rendering layer.

use crate::status::domain::Status;
use crate::task::domain::Task;
use serde::Serialize;

/// One board column as the rendering layer draws it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    /// Column status.
    pub status: Status,
    /// Tasks in display order.
    pub tasks: Vec<Task>,
    /// Whether the column is the current drop target.
    pub is_drop_target: bool,
}

impl ColumnView {
    /// Creates a column view.
    #[must_use]
    pub const fn new(status: Status, tasks: Vec<Task>, is_drop_target: bool) -> Self {
        Self {
            status,
            tasks,
            is_drop_target,
        }
    }
}
