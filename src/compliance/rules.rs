//! Direction ratings and the standard Vastu rule table

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::io::configuration::{FAVORABLE_POINTS, NEUTRAL_POINTS, UNFAVORABLE_POINTS};
use crate::rooms::kind::RoomType;
use crate::spatial::compass::Direction;
use crate::spatial::compass::Direction::{
    East, North, NorthEast, NorthWest, South, SouthEast, SouthWest, West,
};

/// How well a direction suits a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// Recommended placement
    Favorable,
    /// Acceptable placement
    Neutral,
    /// Placement to avoid
    Unfavorable,
}

impl Rating {
    /// Score contribution of one assessment
    pub const fn points(self) -> u32 {
        match self {
            Self::Favorable => FAVORABLE_POINTS,
            Self::Neutral => NEUTRAL_POINTS,
            Self::Unfavorable => UNFAVORABLE_POINTS,
        }
    }

    /// The lower of two ratings
    #[must_use]
    pub const fn cap(self, ceiling: Self) -> Self {
        match (self, ceiling) {
            (Self::Unfavorable, _) | (_, Self::Unfavorable) => Self::Unfavorable,
            (Self::Neutral, _) | (_, Self::Neutral) => Self::Neutral,
            (Self::Favorable, Self::Favorable) => Self::Favorable,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Favorable => f.write_str("favorable"),
            Self::Neutral => f.write_str("neutral"),
            Self::Unfavorable => f.write_str("unfavorable"),
        }
    }
}

/// Rating of one room/direction pair with advisory text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Compliance {
    /// Verdict
    pub rating: Rating,
    /// Human readable advice
    pub advice: String,
}

/// Source of direction verdicts and recommendations
pub trait ComplianceLookup {
    /// Rate `direction` for a room of type `room`
    fn assess(&self, room: RoomType, direction: Direction) -> Compliance;

    /// Recommended directions for a room type, best first
    fn recommended(&self, room: RoomType) -> Vec<Direction>;
}

/// Favorable and unfavorable sets of one room type; everything else is neutral
#[derive(Debug, Clone, Copy)]
pub struct DirectionRule {
    /// Recommended directions, best first
    pub favorable: &'static [Direction],
    /// Directions to avoid
    pub unfavorable: &'static [Direction],
    /// Advice for a favorable placement
    pub favorable_advice: &'static str,
    /// Advice for a neutral placement
    pub neutral_advice: &'static str,
    /// Advice for an unfavorable placement
    pub unfavorable_advice: &'static str,
}

impl DirectionRule {
    /// Verdict for a direction
    pub fn rate(&self, direction: Direction) -> Rating {
        if self.favorable.contains(&direction) {
            Rating::Favorable
        } else if self.unfavorable.contains(&direction) {
            Rating::Unfavorable
        } else {
            Rating::Neutral
        }
    }

    /// Advice text for a verdict
    pub const fn advice(&self, rating: Rating) -> &'static str {
        match rating {
            Rating::Favorable => self.favorable_advice,
            Rating::Neutral => self.neutral_advice,
            Rating::Unfavorable => self.unfavorable_advice,
        }
    }
}

const ENTRANCE: DirectionRule = DirectionRule {
    favorable: &[North, NorthEast, East],
    unfavorable: &[South, SouthEast, SouthWest, NorthWest],
    favorable_advice: "Excellent! A main entrance in this direction brings prosperity and positive energy.",
    neutral_advice: "Acceptable direction. Consider adding positive symbols near the entrance.",
    unfavorable_advice: "Not ideal. North, Northeast or East are recommended for the main entrance.",
};

const HALL: DirectionRule = DirectionRule {
    favorable: &[North, NorthEast, East],
    unfavorable: &[South, SouthEast, SouthWest],
    favorable_advice: "A living room in this direction promotes family harmony and social interaction.",
    neutral_advice: "Acceptable location. Ensure proper lighting and ventilation.",
    unfavorable_advice: "Not recommended. North, Northeast or East are better for living areas.",
};

const DINING: DirectionRule = DirectionRule {
    favorable: &[East, West],
    unfavorable: &[NorthEast, SouthEast, SouthWest, NorthWest],
    favorable_advice: "Dining in this direction aids digestion and family bonding.",
    neutral_advice: "Acceptable. Keep the dining table clear of pathways.",
    unfavorable_advice: "Corner directions are not ideal for dining. East or West is preferred.",
};

const KITCHEN: DirectionRule = DirectionRule {
    favorable: &[SouthEast],
    unfavorable: &[North, NorthEast, East, South, SouthWest, West],
    favorable_advice: "Southeast is the ideal direction for a kitchen (Agni corner).",
    neutral_advice: "Northwest is acceptable as a secondary option for a kitchen.",
    unfavorable_advice: "Not recommended for a kitchen. Southeast (Agni corner) is ideal.",
};

const BEDROOM: DirectionRule = DirectionRule {
    favorable: &[SouthWest],
    unfavorable: &[North, NorthEast, East, SouthEast],
    favorable_advice: "Southwest provides stability and restful sleep for the master bedroom.",
    neutral_advice: "Acceptable direction. Place the bed head toward south or west.",
    unfavorable_advice: "Not ideal for the master bedroom. Southwest is most recommended.",
};

const BATHROOM: DirectionRule = DirectionRule {
    favorable: &[NorthWest, West],
    unfavorable: &[North, NorthEast, East, SouthEast, SouthWest],
    favorable_advice: "This direction is suitable for bathrooms.",
    neutral_advice: "Acceptable. Ensure proper drainage and ventilation.",
    unfavorable_advice: "Not recommended for a bathroom. Northwest or West are better choices.",
};

const TOILET: DirectionRule = DirectionRule {
    favorable: &[NorthWest, West, South],
    unfavorable: &[North, NorthEast, East, SouthWest],
    favorable_advice: "Appropriate direction for toilet facilities.",
    neutral_advice: "Acceptable location. Keep it clean and well ventilated.",
    unfavorable_advice: "Avoid this direction for toilets. Northwest, West or South are preferred.",
};

const GARDEN: DirectionRule = DirectionRule {
    favorable: &[North, NorthEast, East],
    unfavorable: &[South, SouthEast, SouthWest],
    favorable_advice: "A garden in this direction brings freshness and positive energy.",
    neutral_advice: "Acceptable for garden space. Add water features if possible.",
    unfavorable_advice: "Heavy landscaping is not recommended here. North, Northeast or East are ideal.",
};

const BALCONY: DirectionRule = DirectionRule {
    favorable: &[North, East, NorthEast],
    unfavorable: &[South, SouthEast, SouthWest],
    favorable_advice: "A balcony in this direction gets good ventilation and morning sunlight.",
    neutral_advice: "Acceptable placement. Ensure adequate light and air flow.",
    unfavorable_advice: "Not ideal for a balcony. North, East or Northeast are recommended.",
};

const STORE_ROOM: DirectionRule = DirectionRule {
    favorable: &[SouthWest, South, West],
    unfavorable: &[North, NorthEast, East, SouthEast],
    favorable_advice: "Storage in this direction helps maintain stability.",
    neutral_advice: "Acceptable. Keep it organised and avoid clutter.",
    unfavorable_advice: "Not recommended for storage. Southwest, South or West are better.",
};

/// The classical rule table, independent of the owner's sign
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardVastu;

impl StandardVastu {
    /// Rule set for a room type
    pub const fn rule(room: RoomType) -> &'static DirectionRule {
        match room {
            RoomType::Entrance => &ENTRANCE,
            RoomType::Hall => &HALL,
            RoomType::Dining => &DINING,
            RoomType::Kitchen => &KITCHEN,
            RoomType::Bedroom => &BEDROOM,
            RoomType::Bathroom => &BATHROOM,
            RoomType::Toilet => &TOILET,
            RoomType::Garden => &GARDEN,
            RoomType::Balcony => &BALCONY,
            RoomType::StoreRoom => &STORE_ROOM,
        }
    }
}

impl ComplianceLookup for StandardVastu {
    fn assess(&self, room: RoomType, direction: Direction) -> Compliance {
        let rule = Self::rule(room);
        let rating = rule.rate(direction);
        Compliance {
            rating,
            advice: rule.advice(rating).to_string(),
        }
    }

    fn recommended(&self, room: RoomType) -> Vec<Direction> {
        Self::rule(room).favorable.to_vec()
    }
}
