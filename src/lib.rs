//! Vastu-aware floor-plan layout engine
//!
//! Rooms are requested by type, size, floor and preferred compass direction,
//! then placed on a rectangular plot by a deterministic greedy engine: rooms
//! claim their compass zone in priority order, kitchens and dining rooms pull
//! toward each other, and collisions are resolved by nudging and a grid scan.
//! Plans can be scored against standard or zodiac-specific Vastu rules.

#![forbid(unsafe_code)]

/// Placement engines, configuration and per-floor planning
pub mod algorithm;
/// Direction rules, zodiac tables and plan reports
pub mod compliance;
/// Plan files, exports, errors and the command-line interface
pub mod io;
/// Room types, requests and layouts
pub mod rooms;
/// Compass directions, rectangles, plots and the occupancy grid
pub mod spatial;

pub use algorithm::{LayoutConfig, LayoutEngine, LayoutMode, place_rooms};
pub use io::error::{PlannerError, Result};
pub use rooms::{Layout, PlacedRoom, Placement, RoomRequest, RoomType};
pub use spatial::{Direction, Plot};
