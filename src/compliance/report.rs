//! Plan reports: Vastu score, recommendations, area utilization and layouts

use serde::Serialize;

use crate::algorithm::floors::FloorLayout;
use crate::compliance::rules::{ComplianceLookup, Rating};
use crate::compliance::zodiac::ZodiacProfile;
use crate::io::configuration::{COMFORTABLE_UTILIZATION, FEASIBLE_UTILIZATION, FULL_UTILIZATION};
use crate::rooms::kind::RoomType;
use crate::rooms::layout::Placement;
use crate::rooms::request::{Floor, RoomRequest};
use crate::spatial::compass::Direction;
use crate::spatial::plot::Plot;

/// Verdict for one room with a direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    /// Room label, e.g. `Bedroom 2`
    pub room: String,
    /// Category of the room
    pub room_type: RoomType,
    /// Storey of the room
    pub floor: Floor,
    /// Direction being rated
    pub direction: Direction,
    /// Verdict
    pub rating: Rating,
    /// Advisory text
    pub advice: String,
}

/// Suggested change for an unfavorable placement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Room label
    pub room: String,
    /// Direction currently requested
    pub current_direction: Direction,
    /// Advisory text
    pub advice: String,
    /// Directions to move the room to, best first
    pub suggested_directions: Vec<Direction>,
}

/// Rate every request that has a direction
pub fn assess_requests(requests: &[RoomRequest], lookup: &dyn ComplianceLookup) -> Vec<Assessment> {
    requests
        .iter()
        .filter_map(|request| {
            let direction = request.direction?;
            let compliance = lookup.assess(request.room_type, direction);
            Some(Assessment {
                room: request.label(),
                room_type: request.room_type,
                floor: request.floor,
                direction,
                rating: compliance.rating,
                advice: compliance.advice,
            })
        })
        .collect()
}

/// Rounded mean of assessment points, 0 without assessments
pub fn vastu_score(assessments: &[Assessment]) -> u32 {
    if assessments.is_empty() {
        return 0;
    }
    let total: u32 = assessments.iter().map(|a| a.rating.points()).sum();
    (f64::from(total) / assessments.len() as f64).round() as u32
}

/// Number of favorable assessments
pub fn compliant_count(assessments: &[Assessment]) -> usize {
    assessments
        .iter()
        .filter(|a| a.rating == Rating::Favorable)
        .count()
}

/// One recommendation per unfavorable assessment
pub fn recommendations(
    assessments: &[Assessment],
    lookup: &dyn ComplianceLookup,
) -> Vec<Recommendation> {
    assessments
        .iter()
        .filter(|a| a.rating == Rating::Unfavorable)
        .map(|a| Recommendation {
            room: a.room.clone(),
            current_direction: a.direction,
            advice: a.advice.clone(),
            suggested_directions: lookup.recommended(a.room_type),
        })
        .collect()
}

/// Give every request without a direction the first recommended one
///
/// Returns the number of requests that were filled in.
pub fn fill_missing_directions(requests: &mut [RoomRequest], lookup: &dyn ComplianceLookup) -> usize {
    let mut filled = 0;
    for request in requests.iter_mut().filter(|r| r.direction.is_none()) {
        if let Some(&direction) = lookup.recommended(request.room_type).first() {
            request.direction = Some(direction);
            filled += 1;
        }
    }
    filled
}

/// Classification of requested area against plot area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilizationStatus {
    /// At most 80% of the plot
    Comfortable,
    /// Above 80% up to the full plot
    Tight,
    /// More room area than plot area
    OverCapacity,
}

impl UtilizationStatus {
    /// Classify a utilization percentage
    pub fn classify(percent: f64) -> Self {
        if percent <= COMFORTABLE_UTILIZATION {
            Self::Comfortable
        } else if percent <= FULL_UTILIZATION {
            Self::Tight
        } else {
            Self::OverCapacity
        }
    }
}

/// Requested area against the plot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaSummary {
    /// Plot area in square feet
    pub plot_area: f64,
    /// Plot area in cents
    pub plot_area_cents: f64,
    /// Sum of requested room areas in square feet
    pub requested_area: f64,
    /// Requested area as a percentage of the plot
    pub utilization: f64,
    /// Classification of `utilization`
    pub status: UtilizationStatus,
    /// Whether the plan is within reach of the plot at all
    pub feasible: bool,
}

impl AreaSummary {
    /// Summarise requests over a plot
    pub fn new(requests: &[RoomRequest], plot: Plot) -> Self {
        let plot_area = plot.area();
        let requested_area: f64 = requests.iter().map(RoomRequest::area).sum();
        let utilization = if plot_area > 0.0 {
            requested_area / plot_area * 100.0
        } else {
            0.0
        };

        Self {
            plot_area,
            plot_area_cents: plot.area_in_cents(),
            requested_area,
            utilization,
            status: UtilizationStatus::classify(utilization),
            feasible: utilization <= FEASIBLE_UTILIZATION,
        }
    }
}

/// Flattened placed room for reports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomEntry {
    /// Room label
    pub room: String,
    /// Category of the room
    pub room_type: RoomType,
    /// Requested direction, if any
    pub direction: Option<Direction>,
    /// Distance from the west edge
    pub x: f64,
    /// Distance from the north edge
    pub y: f64,
    /// Placed width
    pub width: f64,
    /// Placed height
    pub height: f64,
    /// How the position was obtained
    pub placement: Placement,
}

/// Summary of one floor layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloorReport {
    /// Storey
    pub floor: Floor,
    /// Placed rooms in placement order
    pub rooms: Vec<RoomEntry>,
    /// Number of overlapping room pairs
    pub overlaps: usize,
    /// Rooms placed by the best-effort fallback
    pub degraded: usize,
    /// Placed room area as a percentage of the plot
    pub utilization: f64,
}

impl From<&FloorLayout> for FloorReport {
    fn from(floor_layout: &FloorLayout) -> Self {
        let layout = &floor_layout.layout;
        Self {
            floor: floor_layout.floor,
            rooms: layout
                .rooms
                .iter()
                .map(|room| RoomEntry {
                    room: room.request.label(),
                    room_type: room.room_type(),
                    direction: room.request.direction,
                    x: room.x(),
                    y: room.y(),
                    width: room.width(),
                    height: room.height(),
                    placement: room.placement,
                })
                .collect(),
            overlaps: layout.overlapping_pairs().len(),
            degraded: layout.degraded_count(),
            utilization: layout.utilization(),
        }
    }
}

/// Everything known about a planned house
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanReport {
    /// Owner's zodiac profile, when a sign was given
    pub zodiac: Option<ZodiacProfile>,
    /// Mean compliance points, 0 to 100
    pub vastu_score: u32,
    /// Favorable assessments
    pub compliant_rooms: usize,
    /// Rooms that had a direction to assess
    pub assessed_rooms: usize,
    /// Per-room verdicts
    pub assessments: Vec<Assessment>,
    /// Suggested changes for unfavorable rooms
    pub recommendations: Vec<Recommendation>,
    /// Area utilization
    pub area: AreaSummary,
    /// Per-floor layouts
    pub floors: Vec<FloorReport>,
}

impl PlanReport {
    /// Assemble a report from requests, their layouts and a lookup
    pub fn build(
        requests: &[RoomRequest],
        plot: Plot,
        floors: &[FloorLayout],
        lookup: &dyn ComplianceLookup,
        zodiac: Option<&ZodiacProfile>,
    ) -> Self {
        let assessments = assess_requests(requests, lookup);
        Self {
            zodiac: zodiac.cloned(),
            vastu_score: vastu_score(&assessments),
            compliant_rooms: compliant_count(&assessments),
            assessed_rooms: assessments.len(),
            recommendations: recommendations(&assessments, lookup),
            area: AreaSummary::new(requests, plot),
            floors: floors.iter().map(FloorReport::from).collect(),
            assessments,
        }
    }

    /// Total overlapping pairs across floors
    pub fn overlap_count(&self) -> usize {
        self.floors.iter().map(|floor| floor.overlaps).sum()
    }

    /// Total degraded rooms across floors
    pub fn degraded_count(&self) -> usize {
        self.floors.iter().map(|floor| floor.degraded).sum()
    }
}
