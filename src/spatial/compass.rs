//! Eight-point compass directions used as placement bias and compliance keys

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight cardinal and intercardinal compass directions
///
/// North is the top edge of the plot (`y = 0`), east the right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Top edge, horizontal centre band
    #[serde(alias = "n")]
    North,
    /// Top-right corner
    #[serde(alias = "ne", alias = "north-east", alias = "north_east")]
    NorthEast,
    /// Right edge, vertical centre band
    #[serde(alias = "e")]
    East,
    /// Bottom-right corner
    #[serde(alias = "se", alias = "south-east", alias = "south_east")]
    SouthEast,
    /// Bottom edge, horizontal centre band
    #[serde(alias = "s")]
    South,
    /// Bottom-left corner
    #[serde(alias = "sw", alias = "south-west", alias = "south_west")]
    SouthWest,
    /// Left edge, vertical centre band
    #[serde(alias = "w")]
    West,
    /// Top-left corner
    #[serde(alias = "nw", alias = "north-west", alias = "north_west")]
    NorthWest,
}

impl Direction {
    /// All directions clockwise from north
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Short compass label such as `NE`
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        }
    }

    /// Human-readable name such as `Northeast`
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::NorthEast => "Northeast",
            Self::East => "East",
            Self::SouthEast => "Southeast",
            Self::South => "South",
            Self::SouthWest => "Southwest",
            Self::West => "West",
            Self::NorthWest => "Northwest",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no compass direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError {
    /// The rejected input
    pub input: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a compass direction", self.input)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|direction| {
                normalized.eq_ignore_ascii_case(direction.name())
                    || normalized.eq_ignore_ascii_case(direction.abbreviation())
            })
            .ok_or_else(|| ParseDirectionError {
                input: s.to_string(),
            })
    }
}
