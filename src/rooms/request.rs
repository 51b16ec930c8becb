//! Room requests: what the planner is asked to place

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::io::configuration::{DEFAULT_ASPECT_RATIO, MAIN_ENTRANCE_DEPTH, MAIN_ENTRANCE_WIDTH};
use crate::rooms::kind::RoomType;
use crate::spatial::compass::Direction;

/// Storey a room belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Floor {
    /// Ground floor (index 0)
    #[default]
    Ground,
    /// First floor (index 1)
    First,
}

impl Floor {
    /// All floors, bottom up
    pub const ALL: [Self; 2] = [Self::Ground, Self::First];

    /// Zero-based storey index
    pub const fn index(self) -> usize {
        match self {
            Self::Ground => 0,
            Self::First => 1,
        }
    }

    /// Short name used in file names
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Ground => "ground",
            Self::First => "first",
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ground => f.write_str("Ground Floor"),
            Self::First => f.write_str("First Floor"),
        }
    }
}

/// Neighbour preferences of a room
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Adjacency {
    /// Types this room should be placed flush against, in preference order
    #[serde(default)]
    pub preferred: Vec<RoomType>,
    /// Types this room should not share a wall with
    #[serde(default)]
    pub avoided: Vec<RoomType>,
}

impl Adjacency {
    /// Catalog preferences for a room type
    pub fn for_room(room_type: RoomType) -> Self {
        Self {
            preferred: room_type.default_preferred_neighbors().to_vec(),
            avoided: room_type.default_avoided_neighbors().to_vec(),
        }
    }

    /// No preferences at all
    pub const fn none() -> Self {
        Self {
            preferred: Vec::new(),
            avoided: Vec::new(),
        }
    }
}

/// A room to be placed on one floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRequest {
    /// Category of the room
    pub room_type: RoomType,
    /// Target width in feet
    pub width: f64,
    /// Target height in feet
    pub height: f64,
    /// Storey the room belongs to
    pub floor: Floor,
    /// Preferred compass zone
    pub direction: Option<Direction>,
    /// Neighbour preferences
    pub adjacency: Adjacency,
    /// Instance number when several rooms of one type are requested
    pub number: Option<u32>,
}

impl RoomRequest {
    /// Request a room with explicit dimensions and catalog neighbour preferences
    pub fn new(room_type: RoomType, width: f64, height: f64) -> Self {
        Self {
            room_type,
            width,
            height,
            floor: Floor::Ground,
            direction: None,
            adjacency: Adjacency::for_room(room_type),
            number: None,
        }
    }

    /// Request a room by target area using the default aspect ratio
    pub fn from_area(room_type: RoomType, area: f64) -> Self {
        let (width, height) = dimensions_for_area(area, DEFAULT_ASPECT_RATIO);
        Self::new(room_type, width, height)
    }

    /// Request a room with the catalog default area
    pub fn with_catalog_size(room_type: RoomType) -> Self {
        Self::from_area(room_type, room_type.default_area())
    }

    /// The 4 x 3 ground floor main entrance facing `direction`
    pub fn main_entrance(direction: Direction) -> Self {
        Self::new(RoomType::Entrance, MAIN_ENTRANCE_WIDTH, MAIN_ENTRANCE_DEPTH)
            .with_direction(direction)
    }

    /// Set the preferred compass zone
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Set the storey
    #[must_use]
    pub const fn on_floor(mut self, floor: Floor) -> Self {
        self.floor = floor;
        self
    }

    /// Replace the neighbour preferences
    #[must_use]
    pub fn with_adjacency(mut self, adjacency: Adjacency) -> Self {
        self.adjacency = adjacency;
        self
    }

    /// Set the instance number
    #[must_use]
    pub const fn with_number(mut self, number: u32) -> Self {
        self.number = Some(number);
        self
    }

    /// Target area in square feet
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Display label including the instance number, e.g. `Bedroom 2`
    pub fn label(&self) -> String {
        match self.number {
            Some(number) => format!("{} {number}", self.room_type.label()),
            None => self.room_type.label().to_string(),
        }
    }
}

/// Width and height for a target area with `aspect_ratio = width / height`
pub fn dimensions_for_area(area: f64, aspect_ratio: f64) -> (f64, f64) {
    let area = area.max(0.0);
    let ratio = if aspect_ratio > 0.0 { aspect_ratio } else { 1.0 };
    ((area * ratio).sqrt(), (area / ratio).sqrt())
}
