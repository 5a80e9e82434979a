//! Port contracts for board tasks.
//!
//! Ports define infrastructure-agnostic interfaces used by the drag
//! controller.

pub mod source;

pub use source::{TaskSource, TaskSourceError, TaskSourceResult};

#[cfg(test)]
pub use source::MockTaskSource;
