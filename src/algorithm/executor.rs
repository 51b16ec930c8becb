//! Layout engine entry points and runtime configuration

use serde::{Deserialize, Serialize};

use crate::algorithm::directional::place_directional;
use crate::algorithm::rows::pack_rows;
use crate::io::configuration::{
    ANCHOR_MARGIN, FAR_SIDE_FRACTION, GRID_RESOLUTION, MAX_LAYOUT_PASSES, MAX_NUDGE_ATTEMPTS,
    MAX_ROOM_PLOT_FRACTION, NUDGE_FRACTION,
};
use crate::io::error::{PlannerError, Result, invalid_parameter};
use crate::rooms::layout::{Layout, PlacedRoom};
use crate::rooms::request::RoomRequest;
use crate::spatial::geometry::GEOMETRY_EPSILON;
use crate::spatial::plot::Plot;

/// Placement strategy
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Compass-zone anchors with adjacency overrides and grid fallback
    #[default]
    Directional,
    /// Left-to-right rows, largest room first, directions ignored
    Rows,
}

/// Parameters controlling the placement heuristics
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Placement strategy
    pub mode: LayoutMode,
    /// Gap between zone anchors and the plot edge, in feet
    pub anchor_margin: f64,
    /// Plot fraction where east and south anchors start
    pub far_side_fraction: f64,
    /// Fraction of the room size moved per nudge
    pub nudge_fraction: f64,
    /// Nudge attempts before the grid scan
    pub max_nudge_attempts: usize,
    /// Directional passes tried before settling for degraded rooms
    pub max_layout_passes: usize,
    /// Occupancy grid cell size, in feet
    pub grid_resolution: f64,
    /// Largest share of a plot dimension one room may take
    pub max_room_plot_fraction: f64,
    /// Row packer limit, `None` for width-only wrapping
    pub max_rooms_per_row: Option<usize>,
    /// Fail instead of accepting degraded placements
    pub strict: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Directional,
            anchor_margin: ANCHOR_MARGIN,
            far_side_fraction: FAR_SIDE_FRACTION,
            nudge_fraction: NUDGE_FRACTION,
            max_nudge_attempts: MAX_NUDGE_ATTEMPTS,
            max_layout_passes: MAX_LAYOUT_PASSES,
            grid_resolution: GRID_RESOLUTION,
            max_room_plot_fraction: MAX_ROOM_PLOT_FRACTION,
            max_rooms_per_row: None,
            strict: false,
        }
    }
}

impl LayoutConfig {
    /// Same configuration with a different mode
    #[must_use]
    pub const fn with_mode(mut self, mode: LayoutMode) -> Self {
        self.mode = mode;
        self
    }

    /// Same configuration with strict mode toggled
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Place rooms with the default directional engine
///
/// Never fails: every request appears exactly once in the result, rooms
/// without a free position are tagged degraded.
pub fn place_rooms(requests: &[RoomRequest], plot: Plot) -> Layout {
    place_rooms_with(requests, plot, &[], &LayoutConfig::default())
}

/// Place rooms around pre-placed ones with an explicit configuration
pub fn place_rooms_with(
    requests: &[RoomRequest],
    plot: Plot,
    fixed: &[PlacedRoom],
    config: &LayoutConfig,
) -> Layout {
    match config.mode {
        LayoutMode::Directional => place_directional(requests, plot, fixed, config),
        LayoutMode::Rows => pack_rows(requests, plot, fixed, config),
    }
}

/// Validating wrapper around the placement engines
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Engine with the given configuration
    pub const fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Validate inputs and place one floor
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The plot or any room has a non-positive or non-finite dimension
    /// - The plot is larger than the supported maximum
    /// - A fixed room lies outside the plot or overlaps another fixed room
    /// - Strict mode is on and the requested area exceeds the plot area
    /// - Strict mode is on and the layout has degraded, overlapping or
    ///   out-of-plot rooms
    pub fn execute(
        &self,
        requests: &[RoomRequest],
        plot: Plot,
        fixed: &[PlacedRoom],
    ) -> Result<Layout> {
        Plot::try_new(plot.width, plot.height)?;
        for request in requests.iter().chain(fixed.iter().map(|room| &room.request)) {
            validate_dimension("room.width", request.width)?;
            validate_dimension("room.height", request.height)?;
        }
        validate_fixed(plot, fixed)?;

        let requested_area: f64 = requests
            .iter()
            .map(RoomRequest::area)
            .chain(fixed.iter().map(|room| room.rect.area()))
            .sum();
        let plot_area = plot.area();

        if self.config.strict && requested_area > plot_area + GEOMETRY_EPSILON {
            return Err(PlannerError::LayoutInfeasible {
                floor: None,
                requested_area,
                plot_area,
                degraded_rooms: 0,
            });
        }

        let layout = place_rooms_with(requests, plot, fixed, &self.config);
        let degraded_rooms = layout.degraded_count();

        tracing::info!(
            mode = ?self.config.mode,
            rooms = layout.len(),
            degraded = degraded_rooms,
            utilization = layout.utilization(),
            "layout complete"
        );

        if self.config.strict && !layout.is_clean() {
            return Err(PlannerError::LayoutInfeasible {
                floor: None,
                requested_area,
                plot_area,
                degraded_rooms,
            });
        }

        Ok(layout)
    }
}

/// Fixed rooms must sit inside the plot and clear of each other
fn validate_fixed(plot: Plot, fixed: &[PlacedRoom]) -> Result<()> {
    for (index, room) in fixed.iter().enumerate() {
        if !plot.contains(&room.rect) {
            return Err(invalid_parameter(
                "fixed.position",
                &format!("{} at ({}, {})", room.request.label(), room.x(), room.y()),
                &format!("must lie inside the {} x {} plot", plot.width, plot.height),
            ));
        }

        let clash = fixed
            .iter()
            .take(index)
            .find(|other| other.rect.overlaps(&room.rect));
        if let Some(other) = clash {
            return Err(invalid_parameter(
                "fixed.position",
                &format!("{} at ({}, {})", room.request.label(), room.x(), room.y()),
                &format!("overlaps {}", other.request.label()),
            ));
        }
    }
    Ok(())
}

fn validate_dimension(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &"must be a positive, finite number of feet",
        ))
    }
}
