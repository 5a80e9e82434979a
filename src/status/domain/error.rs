//! Error types for status domain validation and staged editing.

use super::StatusId;
use thiserror::Error;

/// Errors returned while constructing status domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatusDomainError {
    /// The status name is empty after trimming.
    #[error("status name must not be empty")]
    EmptyName,

    /// The status name exceeds the configured length.
    #[error("status name is {actual} characters, the limit is {max}")]
    NameTooLong {
        /// Configured maximum length in characters.
        max: usize,
        /// Length of the rejected name in characters.
        actual: usize,
    },

    /// The color is not a `#rgb` or `#rrggbb` hex value.
    #[error("invalid status color '{0}', expected #rgb or #rrggbb")]
    InvalidColor(String),
}

/// Validation errors raised synchronously by a status edit session.
///
/// These never reach the status source: a rejected edit leaves the staged
/// list untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatusEditError {
    /// The terminal status cannot be deleted.
    #[error("the terminal status {0} cannot be deleted")]
    CannotDeleteTerminal(StatusId),

    /// A board must keep at least one status.
    #[error("the last remaining status cannot be deleted")]
    CannotDeleteLast,

    /// The status still holds tasks.
    #[error("status {id} still holds {task_count} task(s)")]
    StatusNotEmpty {
        /// Status that was asked to be deleted.
        id: StatusId,
        /// Live task count supplied by the caller.
        task_count: usize,
    },

    /// The terminal status cannot be renamed, recolored, or moved.
    #[error("the terminal status {0} cannot be edited or moved")]
    TerminalStatusLocked(StatusId),

    /// The status is not part of the edit session.
    #[error("status {0} is not part of this edit session")]
    StatusNotFound(StatusId),

    /// The status is staged for deletion and must be restored first.
    #[error("status {0} is staged for deletion")]
    StatusDeleted(StatusId),

    /// Adding another status would exceed the configured limit.
    #[error("a board may hold at most {max} statuses")]
    TooManyStatuses {
        /// Configured maximum number of live statuses.
        max: usize,
    },

    /// Name or color validation failed.
    #[error(transparent)]
    Domain(#[from] StatusDomainError),
}
