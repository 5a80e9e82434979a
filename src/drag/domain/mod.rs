//! Domain model for dragging tasks across a board.
//!
//! Geometry and collision detection decide where a dragged task would land;
//! [`DragPhase`] tracks a single gesture from start to drop.

pub mod collision;
mod geometry;
mod session;

pub use collision::{DragGeometry, DropTarget, Droppable, DroppableKind};
pub use geometry::{OverlapRatio, Point, Rect};
pub use session::{DragError, DragPhase, DragSession};
