//! Placed rooms and per-floor layouts produced by the placement engines

use serde::{Deserialize, Serialize};

use crate::rooms::kind::RoomType;
use crate::rooms::request::RoomRequest;
use crate::spatial::geometry::Rect;
use crate::spatial::plot::Plot;

/// How a room obtained its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Supplied by the caller before placement started
    Fixed,
    /// At one of the anchors of its compass zone
    Anchored,
    /// Flush against a preferred neighbour
    Adjacent,
    /// Shifted away from its anchor by the bounded nudge loop
    Nudged,
    /// First free slot of the occupancy grid scan
    Scanned,
    /// Next slot of the row packer
    Packed,
    /// No free position was found; clamped into the plot and may overlap
    Degraded,
}

impl Placement {
    /// Whether the position is a best-effort fallback
    pub const fn is_degraded(self) -> bool {
        matches!(self, Self::Degraded)
    }
}

/// A room request with its assigned rectangle
///
/// The rectangle carries the final size, which can be smaller than the
/// requested one when the request did not fit the plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedRoom {
    /// The originating request
    pub request: RoomRequest,
    /// Assigned position and size
    pub rect: Rect,
    /// How the position was obtained
    pub placement: Placement,
}

impl PlacedRoom {
    /// Pin a request at a given top-left corner with its requested size
    pub const fn fixed(request: RoomRequest, x: f64, y: f64) -> Self {
        let rect = Rect::new(x, y, request.width, request.height);
        Self {
            request,
            rect,
            placement: Placement::Fixed,
        }
    }

    /// Category of the room
    pub const fn room_type(&self) -> RoomType {
        self.request.room_type
    }

    /// Distance from the west edge
    pub const fn x(&self) -> f64 {
        self.rect.x
    }

    /// Distance from the north edge
    pub const fn y(&self) -> f64 {
        self.rect.y
    }

    /// Placed width
    pub const fn width(&self) -> f64 {
        self.rect.width
    }

    /// Placed height
    pub const fn height(&self) -> f64 {
        self.rect.height
    }
}

/// Placement result for one floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Plot the rooms were placed on
    pub plot: Plot,
    /// Placed rooms in placement order
    pub rooms: Vec<PlacedRoom>,
}

impl Layout {
    /// Wrap placed rooms for a plot
    pub const fn new(plot: Plot, rooms: Vec<PlacedRoom>) -> Self {
        Self { plot, rooms }
    }

    /// Number of placed rooms
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether no room was placed
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// First room of a type, in placement order
    pub fn find(&self, room_type: RoomType) -> Option<&PlacedRoom> {
        self.rooms.iter().find(|room| room.room_type() == room_type)
    }

    /// First room, in placement order, covering a point of the plot
    pub fn room_at(&self, x: f64, y: f64) -> Option<&PlacedRoom> {
        self.rooms.iter().find(|room| room.rect.contains_point(x, y))
    }

    /// Index pairs `(i, j)` with `i < j` of rooms whose rectangles overlap
    pub fn overlapping_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, a) in self.rooms.iter().enumerate() {
            for (j, b) in self.rooms.iter().enumerate().skip(i + 1) {
                if a.rect.overlaps(&b.rect) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    /// Indices of rooms extending past the plot boundary
    pub fn out_of_bounds(&self) -> Vec<usize> {
        self.rooms
            .iter()
            .enumerate()
            .filter(|(_, room)| !self.plot.contains(&room.rect))
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of rooms placed by the best-effort fallback
    pub fn degraded_count(&self) -> usize {
        self.rooms
            .iter()
            .filter(|room| room.placement.is_degraded())
            .count()
    }

    /// No degraded placements, no overlaps, everything inside the plot
    pub fn is_clean(&self) -> bool {
        self.degraded_count() == 0
            && self.overlapping_pairs().is_empty()
            && self.out_of_bounds().is_empty()
    }

    /// Sum of placed room areas in square feet
    pub fn room_area(&self) -> f64 {
        self.rooms.iter().map(|room| room.rect.area()).sum()
    }

    /// Placed room area as a percentage of the plot area
    pub fn utilization(&self) -> f64 {
        let plot_area = self.plot.area();
        if plot_area > 0.0 {
            self.room_area() / plot_area * 100.0
        } else {
            0.0
        }
    }
}
