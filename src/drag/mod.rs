//! Dragging task cards within and across board columns.
//!
//! Pointer and keyboard drag geometry is resolved to a drop target, the
//! move is applied to the local task collection at once, persisted through
//! the task source, and then reconciled with an authoritative refetch.
//!
//! - Geometry, collision detection, and gesture state in [`domain`]
//! - The drag controller and view models in [`services`]

pub mod domain;
pub mod services;
