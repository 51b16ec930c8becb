//! TOML plan files describing a house to lay out
//!
//! ```toml
//! zodiac = "leo"
//! mode = "directional"
//! auto_directions = true
//! entrance = "north"
//!
//! [plot]
//! area = 5.0
//! unit = "cents"
//!
//! [[rooms]]
//! type = "bedroom"
//! count = 2
//! direction = "southwest"
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::algorithm::executor::LayoutMode;
use crate::compliance::zodiac::ZodiacSign;
use crate::io::configuration::DEFAULT_MAX_ROOMS_PER_ROW;
use crate::io::error::{PlannerError, Result, file_system_error, invalid_plan};
use crate::rooms::kind::RoomType;
use crate::rooms::layout::PlacedRoom;
use crate::rooms::request::{Adjacency, Floor, RoomRequest};
use crate::spatial::compass::Direction;
use crate::spatial::plot::{AreaUnit, Plot};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlanFile {
    zodiac: Option<ZodiacSign>,
    #[serde(default)]
    mode: LayoutMode,
    #[serde(default)]
    auto_directions: bool,
    entrance: Option<Direction>,
    max_rooms_per_row: Option<RowLimit>,
    plot: PlotSection,
    #[serde(default)]
    rooms: Vec<RoomSection>,
    #[serde(default)]
    fixed: Vec<FixedSection>,
}

/// `max_rooms_per_row = true` uses the default limit, a number sets it
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
enum RowLimit {
    Enabled(bool),
    Rooms(usize),
}

impl RowLimit {
    fn resolve(self) -> Result<Option<usize>> {
        match self {
            Self::Enabled(true) => Ok(Some(DEFAULT_MAX_ROOMS_PER_ROW)),
            Self::Enabled(false) => Ok(None),
            Self::Rooms(0) => Err(invalid_plan(&"max_rooms_per_row must be at least 1")),
            Self::Rooms(rooms) => Ok(Some(rooms)),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlotSection {
    area: Option<f64>,
    #[serde(default)]
    unit: AreaUnit,
    width: Option<f64>,
    height: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RoomSection {
    #[serde(rename = "type")]
    room_type: RoomType,
    #[serde(default = "default_count")]
    count: u32,
    #[serde(default)]
    floor: Floor,
    direction: Option<Direction>,
    area: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
    preferred: Option<Vec<RoomType>>,
    avoided: Option<Vec<RoomType>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FixedSection {
    #[serde(rename = "type")]
    room_type: RoomType,
    #[serde(default)]
    floor: Floor,
    direction: Option<Direction>,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

const fn default_count() -> u32 {
    1
}

/// A parsed and validated plan
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    /// Plot the house is built on
    pub plot: Plot,
    /// Owner's sign, selects the zodiac rule set
    pub zodiac: Option<ZodiacSign>,
    /// Placement strategy
    pub mode: LayoutMode,
    /// Fill missing directions from the active rule set
    pub auto_directions: bool,
    /// Row packer limit
    pub max_rooms_per_row: Option<usize>,
    /// Rooms to place, one entry per instance
    pub rooms: Vec<RoomRequest>,
    /// Pre-placed rooms
    pub fixed: Vec<PlacedRoom>,
}

impl Plan {
    /// Read and validate a plan file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The content is not valid plan TOML
    /// - The plan is inconsistent (see [`Plan::from_toml_str`])
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).map_err(|e| file_system_error(path, "read plan", e))?;
        Self::parse(&text, path)
    }

    /// Parse a plan from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The text is not valid plan TOML
    /// - The plot gives neither an area nor both dimensions, or gives both
    /// - A plot side is larger than the supported maximum
    /// - A room count is zero, or a room size is given twice or not positive
    /// - `entrance` is set while the ground floor also lists an entrance
    /// - A fixed room has a non-positive size or leaves the plot
    /// - `max_rooms_per_row` is zero
    /// - No rooms are requested
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Self::parse(text, Path::new("<inline>"))
    }

    fn parse(text: &str, path: &Path) -> Result<Self> {
        let file: PlanFile = toml::from_str(text).map_err(|e| PlannerError::PlanLoad {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

        let plot = file.plot.resolve()?;

        let mut rooms = Vec::new();
        if let Some(direction) = file.entrance {
            rooms.push(RoomRequest::main_entrance(direction));
        }
        for section in &file.rooms {
            rooms.extend(section.expand()?);
        }
        if rooms.is_empty() && file.fixed.is_empty() {
            return Err(invalid_plan(&"plan requests no rooms"));
        }

        if file.entrance.is_some() {
            let mut listed = file
                .rooms
                .iter()
                .map(|section| (section.room_type, section.floor))
                .chain(file.fixed.iter().map(|section| (section.room_type, section.floor)));
            if listed.any(|entry| entry == (RoomType::Entrance, Floor::Ground)) {
                return Err(invalid_plan(
                    &"`entrance` already adds the ground floor entrance, drop the listed one",
                ));
            }
        }

        let fixed = file
            .fixed
            .iter()
            .map(|section| section.resolve(plot))
            .collect::<Result<_>>()?;
        let max_rooms_per_row = file.max_rooms_per_row.map(RowLimit::resolve).transpose()?.flatten();

        Ok(Self {
            plot,
            zodiac: file.zodiac,
            mode: file.mode,
            auto_directions: file.auto_directions,
            max_rooms_per_row,
            rooms,
            fixed,
        })
    }
}

impl PlotSection {
    fn resolve(&self) -> Result<Plot> {
        match (self.area, self.width, self.height) {
            (Some(area), None, None) => {
                if area.is_finite() && area > 0.0 {
                    let square = Plot::from_area(area, self.unit);
                    Plot::try_new(square.width, square.height)
                } else {
                    Err(invalid_plan(&format!("plot area must be positive, got {area}")))
                }
            }
            (None, Some(width), Some(height)) => Plot::try_new(width, height),
            _ => Err(invalid_plan(
                &"plot needs either `area` or both `width` and `height`",
            )),
        }
    }
}

impl RoomSection {
    fn size(&self) -> Result<RoomRequest> {
        let request = match (self.area, self.width, self.height) {
            (None, None, None) => RoomRequest::with_catalog_size(self.room_type),
            (Some(area), None, None) if area.is_finite() && area > 0.0 => {
                RoomRequest::from_area(self.room_type, area)
            }
            (None, Some(width), Some(height))
                if width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0 =>
            {
                RoomRequest::new(self.room_type, width, height)
            }
            _ => {
                return Err(invalid_plan(&format!(
                    "{} needs a positive `area`, or positive `width` and `height`",
                    self.room_type
                )));
            }
        };
        Ok(request)
    }

    fn expand(&self) -> Result<Vec<RoomRequest>> {
        if self.count == 0 {
            return Err(invalid_plan(&format!("{} has a count of zero", self.room_type)));
        }

        let mut base = self.size()?.on_floor(self.floor);
        if let Some(direction) = self.direction {
            base = base.with_direction(direction);
        }
        if self.preferred.is_some() || self.avoided.is_some() {
            let defaults = Adjacency::for_room(self.room_type);
            base = base.with_adjacency(Adjacency {
                preferred: self.preferred.clone().unwrap_or(defaults.preferred),
                avoided: self.avoided.clone().unwrap_or(defaults.avoided),
            });
        }

        if self.count == 1 {
            return Ok(vec![base]);
        }
        Ok((1..=self.count)
            .map(|number| base.clone().with_number(number))
            .collect())
    }
}

impl FixedSection {
    fn resolve(&self, plot: Plot) -> Result<PlacedRoom> {
        let sized = [self.width, self.height]
            .iter()
            .all(|side| side.is_finite() && *side > 0.0);
        if !sized || !self.x.is_finite() || !self.y.is_finite() {
            return Err(invalid_plan(&format!(
                "fixed {} needs finite `x` and `y` and a positive `width` and `height`",
                self.room_type
            )));
        }

        let mut request =
            RoomRequest::new(self.room_type, self.width, self.height).on_floor(self.floor);
        request.direction = self.direction;
        let room = PlacedRoom::fixed(request, self.x, self.y);

        if !plot.contains(&room.rect) {
            return Err(invalid_plan(&format!(
                "fixed {} at ({}, {}) does not fit the {} x {} plot",
                self.room_type, self.x, self.y, plot.width, plot.height
            )));
        }
        Ok(room)
    }
}
