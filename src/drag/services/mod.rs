//! Application services for board drags.

mod controller;
mod view;

pub use controller::{DragOutcome, DragSessionController, MoveReport, ReorderFailed};
pub use view::ColumnView;
