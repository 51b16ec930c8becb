//! Algorithm constants and runtime configuration defaults

// Placement heuristic constants
/// Gap kept between anchored rooms and the plot edge, in feet
pub const ANCHOR_MARGIN: f64 = 1.0;

/// Fraction of the plot at which far-side anchors (east, south) start
pub const FAR_SIDE_FRACTION: f64 = 0.7;

/// Fraction of a room's own size moved per nudge attempt
pub const NUDGE_FRACTION: f64 = 0.3;

// Bounded retry so an unplaceable room cannot stall the layout
/// Maximum nudge attempts before falling back to the grid scan
pub const MAX_NUDGE_ATTEMPTS: usize = 10;

/// Side length of an occupancy grid cell, in feet
pub const GRID_RESOLUTION: f64 = 1.0;

/// Most grid cells along one plot side; coarser cells are used beyond it
pub const MAX_GRID_CELLS_PER_SIDE: f64 = 2048.0;

/// Directional passes per floor, each retrying the previous pass's
/// degraded rooms first
pub const MAX_LAYOUT_PASSES: usize = 4;

// Oversized requests are shrunk so a single room never fills the plot edge to edge
/// Largest share of a plot dimension a single room may take
pub const MAX_ROOM_PLOT_FRACTION: f64 = 0.9;

/// Width-to-height ratio assumed when a room is requested by area
pub const DEFAULT_ASPECT_RATIO: f64 = 1.25;

/// Room limit per row when a plan asks for limited rows without a count
pub const DEFAULT_MAX_ROOMS_PER_ROW: usize = 3;

/// Width of the main entrance a plan's `entrance` shorthand adds, in feet
pub const MAIN_ENTRANCE_WIDTH: f64 = 4.0;
/// Depth of the main entrance a plan's `entrance` shorthand adds, in feet
pub const MAIN_ENTRANCE_DEPTH: f64 = 3.0;

// Plot size cap, keeps the grid and rasters bounded
/// Longest accepted plot side, in feet
pub const MAX_PLOT_SIDE: f64 = 2000.0;

// Unit conversion
/// Square feet in one cent of land
pub const SQUARE_FEET_PER_CENT: f64 = 435.6;

// Report thresholds
/// Utilization percentage up to which a plan is comfortable
pub const COMFORTABLE_UTILIZATION: f64 = 80.0;
/// Utilization percentage above which a plan exceeds the plot
pub const FULL_UTILIZATION: f64 = 100.0;
/// Utilization percentage above which a plan is not worth laying out
pub const FEASIBLE_UTILIZATION: f64 = 120.0;

/// Score awarded for a favorable direction
pub const FAVORABLE_POINTS: u32 = 100;
/// Score awarded for a neutral direction
pub const NEUTRAL_POINTS: u32 = 60;
/// Score awarded for an unfavorable direction
pub const UNFAVORABLE_POINTS: u32 = 20;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to report filenames
pub const REPORT_SUFFIX: &str = "_report";
/// Extension of plan files picked up from a directory
pub const PLAN_EXTENSION: &str = "toml";
/// Default raster scale in pixels per foot
pub const DEFAULT_PIXELS_PER_FOOT: u32 = 10;
/// Largest raster scale accepted on the command line
pub const MAX_PIXELS_PER_FOOT: u32 = 100;
/// Longest raster side in pixels
pub const MAX_RASTER_SIDE: u32 = 16_384;

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "vastuplan=info";
