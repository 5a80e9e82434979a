//! Port contracts for board statuses.
//!
//! Ports define infrastructure-agnostic interfaces used by status services.

pub mod source;

pub use source::{StatusSource, StatusSourceError, StatusSourceResult};

#[cfg(test)]
pub use source::MockStatusSource;
