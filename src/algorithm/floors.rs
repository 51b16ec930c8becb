//! Multi-storey planning: one engine run per floor

use serde::Serialize;

use crate::algorithm::executor::LayoutEngine;
use crate::io::error::{Result, WithContext};
use crate::rooms::layout::{Layout, PlacedRoom};
use crate::rooms::request::{Floor, RoomRequest};
use crate::spatial::plot::Plot;

/// Layout of a single storey
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloorLayout {
    /// Storey the rooms belong to
    pub floor: Floor,
    /// Placement result
    pub layout: Layout,
}

/// Splits a house by floor and lays every floor out on the same plot
#[derive(Debug, Clone, Default)]
pub struct FloorPlanner {
    engine: LayoutEngine,
}

impl FloorPlanner {
    /// Planner driving the given engine
    pub const fn new(engine: LayoutEngine) -> Self {
        Self { engine }
    }

    /// Underlying engine
    pub const fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// Lay out every non-empty floor, ground first
    ///
    /// # Errors
    ///
    /// Returns the first engine error, tagged with the floor it came from
    pub fn plan(
        &self,
        requests: &[RoomRequest],
        plot: Plot,
        fixed: &[PlacedRoom],
    ) -> Result<Vec<FloorLayout>> {
        self.plan_with(requests, plot, fixed, |_| {})
    }

    /// Like [`Self::plan`], calling `on_floor` after each finished floor
    ///
    /// # Errors
    ///
    /// Returns the first engine error, tagged with the floor it came from
    pub fn plan_with(
        &self,
        requests: &[RoomRequest],
        plot: Plot,
        fixed: &[PlacedRoom],
        mut on_floor: impl FnMut(&FloorLayout),
    ) -> Result<Vec<FloorLayout>> {
        let mut floors = Vec::new();

        for floor in Floor::ALL {
            let floor_requests: Vec<RoomRequest> = requests
                .iter()
                .filter(|request| request.floor == floor)
                .cloned()
                .collect();
            let floor_fixed: Vec<PlacedRoom> = fixed
                .iter()
                .filter(|room| room.request.floor == floor)
                .cloned()
                .collect();

            if floor_requests.is_empty() && floor_fixed.is_empty() {
                continue;
            }

            tracing::debug!(%floor, rooms = floor_requests.len(), "planning floor");
            let layout = self
                .engine
                .execute(&floor_requests, plot, &floor_fixed)
                .with_floor(floor)?;

            let floor_layout = FloorLayout { floor, layout };
            on_floor(&floor_layout);
            floors.push(floor_layout);
        }

        Ok(floors)
    }
}
