//! Spatial data structures for plot geometry
//!
//! This module contains spatial-related functionality including:
//! - Compass directions
//! - Rectangles and overlap tests
//! - Plot dimensions and area units
//! - Occupancy grid management

/// Eight-point compass directions
pub mod compass;
/// Axis-aligned rectangle geometry
pub mod geometry;
/// Occupancy grid over a plot
pub mod grid;
/// Plot dimensions and area conversion
pub mod plot;

pub use compass::Direction;
pub use geometry::Rect;
pub use grid::OccupancyGrid;
pub use plot::{AreaUnit, Plot};
