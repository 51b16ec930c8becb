//! Room categories with their catalog defaults
//!
//! Each room type carries a display label, a default target area, a display
//! colour, a placement priority and default neighbour preferences.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    /// Main entrance / door area
    #[serde(alias = "main_entrance", alias = "main_door")]
    Entrance,
    /// Living room
    #[serde(alias = "living_room")]
    Hall,
    /// Dining area
    Dining,
    /// Kitchen
    Kitchen,
    /// Bedroom
    Bedroom,
    /// Bathroom
    Bathroom,
    /// Toilet
    Toilet,
    /// Garden
    Garden,
    /// Balcony
    Balcony,
    /// Store room
    #[serde(alias = "store", alias = "storeroom")]
    StoreRoom,
}

/// Placement order of room types, earliest first
///
/// Later rooms have to route around earlier ones, so the rooms that anchor a
/// home (entrance, living room, kitchen) claim their zones first.
pub const PLACEMENT_PRIORITY: [RoomType; 10] = [
    RoomType::Entrance,
    RoomType::Hall,
    RoomType::Kitchen,
    RoomType::Bedroom,
    RoomType::Dining,
    RoomType::Bathroom,
    RoomType::Toilet,
    RoomType::Garden,
    RoomType::Balcony,
    RoomType::StoreRoom,
];

impl RoomType {
    /// All room types in declaration order
    pub const ALL: [Self; 10] = [
        Self::Entrance,
        Self::Hall,
        Self::Dining,
        Self::Kitchen,
        Self::Bedroom,
        Self::Bathroom,
        Self::Toilet,
        Self::Garden,
        Self::Balcony,
        Self::StoreRoom,
    ];

    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Entrance => "Main Entrance",
            Self::Hall => "Hall",
            Self::Dining => "Dining Area",
            Self::Kitchen => "Kitchen",
            Self::Bedroom => "Bedroom",
            Self::Bathroom => "Bathroom",
            Self::Toilet => "Toilet",
            Self::Garden => "Garden",
            Self::Balcony => "Balcony",
            Self::StoreRoom => "Store Room",
        }
    }

    /// Default target area in square feet
    pub const fn default_area(self) -> f64 {
        match self {
            Self::Entrance => 50.0,
            Self::Hall => 200.0,
            Self::Dining | Self::Kitchen => 120.0,
            Self::Bedroom => 150.0,
            Self::Bathroom | Self::Balcony => 60.0,
            Self::Toilet => 40.0,
            Self::Garden => 100.0,
            Self::StoreRoom => 80.0,
        }
    }

    /// Display colour as RGBA
    pub const fn color(self) -> [u8; 4] {
        match self {
            Self::Entrance => [0x10, 0xb9, 0x81, 0xff],
            Self::Hall => [0x8b, 0x5c, 0xf6, 0xff],
            Self::Dining => [0xf5, 0x9e, 0x0b, 0xff],
            Self::Kitchen => [0xef, 0x44, 0x44, 0xff],
            Self::Bedroom => [0x3b, 0x82, 0xf6, 0xff],
            Self::Bathroom => [0x06, 0xb6, 0xd4, 0xff],
            Self::Toilet => [0x14, 0xb8, 0xa6, 0xff],
            Self::Garden => [0x22, 0xc5, 0x5e, 0xff],
            Self::Balcony => [0xa8, 0x55, 0xf7, 0xff],
            Self::StoreRoom => [0x6b, 0x72, 0x80, 0xff],
        }
    }

    /// Position in [`PLACEMENT_PRIORITY`]
    pub fn priority(self) -> usize {
        PLACEMENT_PRIORITY
            .iter()
            .position(|&room_type| room_type == self)
            .unwrap_or(PLACEMENT_PRIORITY.len())
    }

    /// Room types this room would like to share a wall with
    pub const fn default_preferred_neighbors(self) -> &'static [Self] {
        match self {
            Self::Kitchen => &[Self::Dining],
            Self::Dining => &[Self::Kitchen],
            Self::Bathroom => &[Self::Bedroom],
            _ => &[],
        }
    }

    /// Room types this room should not share a wall with
    pub const fn default_avoided_neighbors(self) -> &'static [Self] {
        match self {
            Self::Kitchen => &[Self::Toilet, Self::Bathroom],
            Self::Dining => &[Self::Toilet],
            Self::Toilet => &[Self::Kitchen, Self::Dining],
            Self::Bathroom => &[Self::Kitchen],
            _ => &[],
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
