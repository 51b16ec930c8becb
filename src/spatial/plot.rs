//! Buildable plot dimensions and land-area unit conversion

use serde::{Deserialize, Serialize};

use crate::io::configuration::{MAX_PLOT_SIDE, SQUARE_FEET_PER_CENT};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::geometry::Rect;

/// Unit of a land-area measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaUnit {
    /// Square feet
    #[default]
    #[serde(alias = "sqft", alias = "sq_ft")]
    SquareFeet,
    /// Cents (1 cent = 435.6 sq ft)
    Cents,
}

impl AreaUnit {
    /// Convert a measurement in this unit to square feet
    pub const fn to_square_feet(self, value: f64) -> f64 {
        match self {
            Self::SquareFeet => value,
            Self::Cents => value * SQUARE_FEET_PER_CENT,
        }
    }
}

/// Convert square feet to cents
pub const fn square_feet_to_cents(square_feet: f64) -> f64 {
    square_feet / SQUARE_FEET_PER_CENT
}

/// The buildable rectangle rooms are placed into, in feet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    /// Extent along the east-west axis
    pub width: f64,
    /// Extent along the north-south axis
    pub height: f64,
}

impl Plot {
    /// Create a plot with explicit dimensions
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Square plot covering the given area
    ///
    /// The footprint is assumed square, so each side is `sqrt(area)` feet.
    pub fn from_area(area: f64, unit: AreaUnit) -> Self {
        let side = unit.to_square_feet(area).max(0.0).sqrt();
        Self::new(side, side)
    }

    /// Checked variant of [`Plot::new`]
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is not a positive finite number
    /// or exceeds [`MAX_PLOT_SIDE`]
    pub fn try_new(width: f64, height: f64) -> Result<Self> {
        for (parameter, value) in [("plot.width", width), ("plot.height", height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"must be a positive number of feet",
                ));
            }
            if value > MAX_PLOT_SIDE {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be at most {MAX_PLOT_SIDE} feet"),
                ));
            }
        }
        Ok(Self::new(width, height))
    }

    /// Area in square feet
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Area in cents
    pub const fn area_in_cents(&self) -> f64 {
        square_feet_to_cents(self.area())
    }

    /// Whether a rectangle lies completely inside the plot
    pub const fn contains(&self, rect: &Rect) -> bool {
        rect.fits_within(self.width, self.height)
    }

    /// Clamp a rectangle into the plot, see [`Rect::clamped_within`]
    pub fn clamp(&self, rect: &Rect) -> Rect {
        rect.clamped_within(self.width, self.height)
    }
}
