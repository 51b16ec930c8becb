//! Room placement engines
//!
//! The directional engine is the default; row packing is the only alternate
//! mode. Both are pure functions of their inputs.

/// Compass-zone anchors and flush candidates
pub mod anchors;
/// Priority-ordered greedy placement with adjacency overrides
pub mod directional;
/// Engine configuration and validating entry points
pub mod executor;
/// Per-floor planning
pub mod floors;
/// Placement ordering
pub mod ordering;
/// Left-to-right row packing
pub mod rows;

pub use directional::{DirectionalPlacer, place_directional};
pub use executor::{LayoutConfig, LayoutEngine, LayoutMode, place_rooms, place_rooms_with};
pub use floors::{FloorLayout, FloorPlanner};
pub use rows::pack_rows;
