//! Drop-target detection for task drags.
//!
//! Detection runs in priority order:
//!
//! 1. pointer-within: droppables whose rect contains the pointer, nearest
//!    center first;
//! 2. a whole-column hit beats any card hit, so hovering near a column
//!    edge does not flicker between the column and its first card;
//! 3. otherwise the nearest card hit;
//! 4. with no pointer hits (skipped frames, keyboard drags) the droppable
//!    overlapping the dragged rect the most, by intersection over union.

use super::{Point, Rect};
use crate::status::domain::StatusId;
use crate::task::domain::{BoardTasks, TaskId};
use serde::{Deserialize, Serialize};

/// What a droppable region represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DroppableKind {
    /// A column's drop zone.
    Column,
    /// A task card within a column.
    Card {
        /// Task rendered by the card.
        task_id: TaskId,
    },
}

/// A rendered region that can receive a dragged task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Droppable {
    /// Column the region belongs to.
    pub status_id: StatusId,
    /// Region kind.
    pub kind: DroppableKind,
    /// Screen rectangle.
    pub rect: Rect,
}

impl Droppable {
    /// Creates a column drop zone.
    #[must_use]
    pub const fn column(status_id: StatusId, rect: Rect) -> Self {
        Self {
            status_id,
            kind: DroppableKind::Column,
            rect,
        }
    }

    /// Creates a card drop region.
    #[must_use]
    pub const fn card(task_id: TaskId, status_id: StatusId, rect: Rect) -> Self {
        Self {
            status_id,
            kind: DroppableKind::Card { task_id },
            rect,
        }
    }

    const fn is_column(&self) -> bool {
        matches!(self.kind, DroppableKind::Column)
    }
}

/// Drag geometry sampled on a pointer move or keyboard step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragGeometry {
    /// Pointer position; `None` for keyboard drags.
    pub pointer: Option<Point>,
    /// Current rectangle of the dragged card.
    pub active_rect: Rect,
    /// Every registered droppable.
    pub droppables: Vec<Droppable>,
}

impl DragGeometry {
    /// Creates geometry for a pointer drag.
    #[must_use]
    pub const fn at_pointer(pointer: Point, active_rect: Rect, droppables: Vec<Droppable>) -> Self {
        Self {
            pointer: Some(pointer),
            active_rect,
            droppables,
        }
    }

    /// Creates geometry for a keyboard drag, which has no pointer.
    #[must_use]
    pub const fn keyboard(active_rect: Rect, droppables: Vec<Droppable>) -> Self {
        Self {
            pointer: None,
            active_rect,
            droppables,
        }
    }
}

/// Column and index a dragged task would land at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DropTarget {
    /// Destination column.
    pub status_id: StatusId,
    /// Index in the destination column without the dragged task.
    pub index: usize,
}

/// Returns the droppable the drag currently collides with.
#[must_use]
pub fn detect(geometry: &DragGeometry) -> Option<&Droppable> {
    if let Some(pointer) = geometry.pointer {
        let mut hits: Vec<&Droppable> = geometry
            .droppables
            .iter()
            .filter(|droppable| droppable.rect.contains(pointer))
            .collect();
        hits.sort_by_key(|droppable| droppable.rect.scaled_center_distance(pointer));

        let column_hit = hits.iter().copied().find(|droppable| droppable.is_column());
        if let Some(hit) = column_hit.or_else(|| hits.first().copied()) {
            return Some(hit);
        }
    }

    closest_by_overlap(geometry)
}

fn closest_by_overlap(geometry: &DragGeometry) -> Option<&Droppable> {
    let mut best: Option<(&Droppable, _)> = None;
    for droppable in &geometry.droppables {
        let ratio = droppable.rect.overlap_ratio(geometry.active_rect);
        if !ratio.is_overlapping() {
            continue;
        }
        let is_better = best
            .as_ref()
            .is_none_or(|(_, best_ratio)| ratio > *best_ratio);
        if is_better {
            best = Some((droppable, ratio));
        }
    }
    best.map(|(droppable, _)| droppable)
}

/// Resolves the column and index the active task would be dropped at.
///
/// A card hit maps to that card's index; a column hit maps to the end of
/// the column. Indices exclude the active task, matching
/// [`BoardTasks::move_task`].
#[must_use]
pub fn resolve(
    geometry: &DragGeometry,
    board: &BoardTasks,
    active_task: TaskId,
) -> Option<DropTarget> {
    let hit = detect(geometry)?;
    let card_location = match hit.kind {
        DroppableKind::Card { task_id } => board.locate(task_id),
        DroppableKind::Column => None,
    };

    let target = card_location.map_or_else(
        || {
            let column = board.column(hit.status_id);
            let holds_active = column.iter().any(|task| task.id() == active_task);
            let index = if holds_active {
                column.len().saturating_sub(1)
            } else {
                column.len()
            };
            DropTarget {
                status_id: hit.status_id,
                index,
            }
        },
        |location| DropTarget {
            status_id: location.status_id,
            index: location.index,
        },
    );
    Some(target)
}

/// Returns the column to highlight: the resolved target column, but only
/// when it differs from the active task's current column.
#[must_use]
pub fn highlight(
    geometry: &DragGeometry,
    board: &BoardTasks,
    active_task: TaskId,
) -> Option<StatusId> {
    let target = resolve(geometry, board, active_task)?;
    let current = board.locate(active_task).map(|location| location.status_id);
    (current != Some(target.status_id)).then_some(target.status_id)
}
