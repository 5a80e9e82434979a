//! Corkboard: task board ordering and status lifecycle engine.
//!
//! This crate keeps the cards and columns of a kanban-style board in a
//! consistent order while users drag cards between columns and edit the
//! set of columns itself.
//!
//! # Architecture
//!
//! Corkboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure ordering and validation logic with no I/O
//! - **Ports**: Abstract trait interfaces to the task and status stores
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//! - **Services**: Orchestration of domain logic over ports
//!
//! # Modules
//!
//! - [`status`]: Status columns, display ordering, and batch editing
//! - [`task`]: Task cards and dense per-column positions
//! - [`drag`]: Drop-target resolution and the drag session controller

pub mod drag;
pub mod status;
pub mod task;
