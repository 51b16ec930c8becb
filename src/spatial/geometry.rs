//! Axis-aligned rectangles in plot coordinates (feet, origin at the north-west corner)

use serde::{Deserialize, Serialize};

/// Tolerance for floating-point edge comparisons
pub const GEOMETRY_EPSILON: f64 = 1e-9;

/// Axis-aligned rectangle with its top-left corner at (`x`, `y`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Distance from the west edge
    pub x: f64,
    /// Distance from the north edge
    pub y: f64,
    /// Extent along x
    pub width: f64,
    /// Extent along y
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge coordinate
    pub const fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge coordinate
    pub const fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Covered area
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Same size, moved to a new top-left corner
    pub const fn at(&self, x: f64, y: f64) -> Self {
        Self::new(x, y, self.width, self.height)
    }

    /// Interior intersection test
    ///
    /// Rectangles are separated when one lies entirely on one side of the other
    /// along either axis. Rectangles sharing only an edge do not overlap.
    pub const fn overlaps(&self, other: &Self) -> bool {
        !(self.right() <= other.x + GEOMETRY_EPSILON
            || self.x >= other.right() - GEOMETRY_EPSILON
            || self.bottom() <= other.y + GEOMETRY_EPSILON
            || self.y >= other.bottom() - GEOMETRY_EPSILON)
    }

    /// Area shared with `other`, zero when they are apart or only touch
    pub fn intersection_area(&self, other: &Self) -> f64 {
        let x_span = self.right().min(other.right()) - self.x.max(other.x);
        let y_span = self.bottom().min(other.bottom()) - self.y.max(other.y);
        x_span.max(0.0) * y_span.max(0.0)
    }

    /// Whether a point lies inside, counting the north and west edges only
    pub const fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether the rectangles share a stretch of edge without overlapping
    pub fn touches(&self, other: &Self) -> bool {
        if self.overlaps(other) {
            return false;
        }

        let vertical_contact = (self.right() - other.x).abs() <= GEOMETRY_EPSILON
            || (other.right() - self.x).abs() <= GEOMETRY_EPSILON;
        let horizontal_contact = (self.bottom() - other.y).abs() <= GEOMETRY_EPSILON
            || (other.bottom() - self.y).abs() <= GEOMETRY_EPSILON;

        let y_span = self.bottom().min(other.bottom()) - self.y.max(other.y);
        let x_span = self.right().min(other.right()) - self.x.max(other.x);

        (vertical_contact && y_span > GEOMETRY_EPSILON)
            || (horizontal_contact && x_span > GEOMETRY_EPSILON)
    }

    /// Whether the rectangle lies within a `width` x `height` area anchored at the origin
    pub const fn fits_within(&self, width: f64, height: f64) -> bool {
        self.x >= -GEOMETRY_EPSILON
            && self.y >= -GEOMETRY_EPSILON
            && self.right() <= width + GEOMETRY_EPSILON
            && self.bottom() <= height + GEOMETRY_EPSILON
    }

    /// Move the rectangle so it lies inside a `width` x `height` area
    ///
    /// `x` is clamped to `[0, width - self.width]` and `y` to `[0, height - self.height]`.
    /// A rectangle larger than the area is pinned to the origin on that axis.
    pub fn clamped_within(&self, width: f64, height: f64) -> Self {
        let x = self.x.min(width - self.width).max(0.0);
        let y = self.y.min(height - self.height).max(0.0);
        self.at(x, y)
    }
}
