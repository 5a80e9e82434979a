//! Integer screen geometry used by collision detection.
//!
//! Coordinates are whole pixels. Centers and ratios are computed without
//! division: centers are kept at doubled scale and ratios are compared by
//! cross-multiplication.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A pointer position in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle; negative sizes are treated as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    const fn left(self) -> i64 {
        self.x as i64
    }

    const fn top(self) -> i64 {
        self.y as i64
    }

    const fn right(self) -> i64 {
        self.x as i64 + if self.width > 0 { self.width as i64 } else { 0 }
    }

    const fn bottom(self) -> i64 {
        self.y as i64 + if self.height > 0 { self.height as i64 } else { 0 }
    }

    /// Returns the area in square pixels.
    #[must_use]
    pub const fn area(self) -> i64 {
        (self.right() - self.left()) * (self.bottom() - self.top())
    }

    /// Returns whether the point lies inside the rectangle, edges included.
    #[must_use]
    pub const fn contains(self, point: Point) -> bool {
        let (px, py) = (point.x as i64, point.y as i64);
        self.left() <= px && px <= self.right() && self.top() <= py && py <= self.bottom()
    }

    /// Returns the area shared with another rectangle.
    #[must_use]
    pub fn intersection_area(self, other: Self) -> i64 {
        let width = self.right().min(other.right()) - self.left().max(other.left());
        let height = self.bottom().min(other.bottom()) - self.top().max(other.top());
        if width <= 0 || height <= 0 {
            return 0;
        }
        width * height
    }

    /// Returns the squared distance from a point to the center, at four
    /// times the true scale.
    #[must_use]
    pub const fn scaled_center_distance(self, point: Point) -> i64 {
        let dx = 2 * point.x as i64 - (self.left() + self.right());
        let dy = 2 * point.y as i64 - (self.top() + self.bottom());
        dx * dx + dy * dy
    }

    /// Returns the intersection-over-union ratio with another rectangle.
    #[must_use]
    pub fn overlap_ratio(self, other: Self) -> OverlapRatio {
        let shared = self.intersection_area(other);
        let union = self.area() + other.area() - shared;
        OverlapRatio {
            shared,
            union: union.max(1),
        }
    }
}

/// Exact intersection-over-union ratio of two rectangles.
#[derive(Debug, Clone, Copy)]
pub struct OverlapRatio {
    shared: i64,
    union: i64,
}

impl OverlapRatio {
    /// Returns whether the rectangles overlap at all.
    #[must_use]
    pub const fn is_overlapping(self) -> bool {
        self.shared > 0
    }
}

impl PartialEq for OverlapRatio {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OverlapRatio {}

impl PartialOrd for OverlapRatio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OverlapRatio {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = i128::from(self.shared) * i128::from(other.union);
        let rhs = i128::from(other.shared) * i128::from(self.union);
        lhs.cmp(&rhs)
    }
}
