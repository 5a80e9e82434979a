//! Board status columns and their batch editor.
//!
//! A board's statuses are its ordered columns. This module keeps the
//! terminal-column display rule, stages add/rename/recolor/reorder/delete
//! edits locally, and commits them to a status source as an ordered
//! sequence of calls. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
