//! Error types and context management for planning operations

use std::fmt;
use std::path::PathBuf;

use crate::rooms::request::Floor;

/// Main error type for all planner operations
#[derive(Debug)]
pub enum PlannerError {
    /// Failed to parse a plan file
    PlanLoad {
        /// Path to the plan file
        path: PathBuf,
        /// Underlying TOML error
        source: Box<toml::de::Error>,
    },

    /// Plan content doesn't describe a usable house
    InvalidPlan {
        /// Description of what's wrong with the plan
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Strict placement could not produce a clean layout
    ///
    /// Occurs when either:
    /// - The requested room area exceeds the plot area
    /// - At least one room had to be placed by the best-effort fallback
    LayoutInfeasible {
        /// Floor being placed, when known
        floor: Option<Floor>,
        /// Total requested room area in square feet
        requested_area: f64,
        /// Plot area in square feet
        plot_area: f64,
        /// Rooms that fell back to a possibly overlapping position
        degraded_rooms: usize,
    },

    /// Failed to save a raster to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Failed to serialise a report
    ReportExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying serialisation error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Embedded reference table could not be read
    DataTable {
        /// Name of the table
        table: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlanLoad { path, source } => {
                write!(f, "Failed to load plan '{}': {source}", path.display())
            }
            Self::InvalidPlan { reason } => {
                write!(f, "Invalid plan: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::LayoutInfeasible {
                floor,
                requested_area,
                plot_area,
                degraded_rooms,
            } => {
                let floor = floor.map_or_else(|| "layout".to_string(), |floor| floor.to_string());
                write!(
                    f,
                    "{floor} is infeasible: {requested_area:.1} sq ft requested on a {plot_area:.1} sq ft plot, {degraded_rooms} room(s) without a free position"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::ReportExport { path, source } => {
                write!(
                    f,
                    "Failed to export report to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::DataTable { table, reason } => {
                write!(f, "Reference table '{table}' is unusable: {reason}")
            }
        }
    }
}

impl std::error::Error for PlannerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PlanLoad { source, .. } => Some(source.as_ref()),
            Self::ImageExport { source, .. } => Some(source),
            Self::ReportExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for planner results
pub type Result<T> = std::result::Result<T, PlannerError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorContext {
    /// Floor being planned
    pub floor: Option<Floor>,
}

/// Enriches error messages with planner state information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the floor context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the floor context applied
    fn with_floor(self, floor: Floor) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<PlannerError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only layout errors are floor specific
            if let (PlannerError::LayoutInfeasible { floor, .. }, Some(context_floor)) =
                (&mut error, context.floor)
            {
                *floor = Some(context_floor);
            }
            error
        })
    }

    fn with_floor(self, floor: Floor) -> Result<T> {
        self.with_context(ErrorContext { floor: Some(floor) })
    }
}

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PlannerError {
    PlannerError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid plan error
pub fn invalid_plan(reason: &impl ToString) -> PlannerError {
    PlannerError::InvalidPlan {
        reason: reason.to_string(),
    }
}

/// Create a file system error for a known path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> PlannerError {
    PlannerError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
