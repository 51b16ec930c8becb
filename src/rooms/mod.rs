//! Room model shared by the placement engines and reports
//!
//! This module contains:
//! - Room categories and their catalog defaults
//! - Room requests and neighbour preferences
//! - Placed rooms and per-floor layouts

/// Room categories and catalog defaults
pub mod kind;
/// Placed rooms and layouts
pub mod layout;
/// Room requests
pub mod request;

pub use kind::RoomType;
pub use layout::{Layout, PlacedRoom, Placement};
pub use request::{Adjacency, Floor, RoomRequest};
