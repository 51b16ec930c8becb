//! Zodiac-specific direction recommendations
//!
//! The table of the twelve signs ships with the crate as TOML and is parsed
//! on demand.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::compliance::rules::{Compliance, ComplianceLookup, Rating, StandardVastu};
use crate::io::error::{PlannerError, Result};
use crate::rooms::kind::RoomType;
use crate::spatial::compass::Direction;

const BUILTIN_TABLE: &str = include_str!("../../data/zodiac.toml");

/// Sun sign of the home owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    /// Mesha
    Aries,
    /// Vrishabha
    Taurus,
    /// Mithuna
    Gemini,
    /// Karka
    Cancer,
    /// Simha
    Leo,
    /// Kanya
    Virgo,
    /// Tula
    Libra,
    /// Vrishchika
    Scorpio,
    /// Dhanu
    Sagittarius,
    /// Makara
    Capricorn,
    /// Kumbha
    Aquarius,
    /// Meena
    Pisces,
}

impl ZodiacSign {
    /// All signs in calendar order
    pub const ALL: [Self; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Recommended directions per room type
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomDirections {
    #[serde(alias = "main_entrance")]
    entrance: Vec<Direction>,
    hall: Vec<Direction>,
    dining: Vec<Direction>,
    kitchen: Vec<Direction>,
    bedroom: Vec<Direction>,
    bathroom: Vec<Direction>,
    toilet: Vec<Direction>,
    garden: Vec<Direction>,
    balcony: Vec<Direction>,
    store_room: Vec<Direction>,
}

impl RoomDirections {
    /// Directions listed for a room type, best first
    pub fn get(&self, room: RoomType) -> &[Direction] {
        match room {
            RoomType::Entrance => &self.entrance,
            RoomType::Hall => &self.hall,
            RoomType::Dining => &self.dining,
            RoomType::Kitchen => &self.kitchen,
            RoomType::Bedroom => &self.bedroom,
            RoomType::Bathroom => &self.bathroom,
            RoomType::Toilet => &self.toilet,
            RoomType::Garden => &self.garden,
            RoomType::Balcony => &self.balcony,
            RoomType::StoreRoom => &self.store_room,
        }
    }
}

/// Everything the table knows about one sign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZodiacProfile {
    /// Sign key
    pub sign: ZodiacSign,
    /// Display name with the Sanskrit name
    pub name: String,
    /// Classical element
    pub element: String,
    /// Ruling planet
    pub ruler: String,
    /// Short guidance text
    pub description: String,
    /// Per-room recommendations
    pub directions: RoomDirections,
}

#[derive(Debug, Deserialize)]
struct TableFile {
    signs: Vec<ZodiacProfile>,
}

/// Parsed zodiac table
#[derive(Debug, Clone)]
pub struct ZodiacTable {
    profiles: Vec<ZodiacProfile>,
}

impl ZodiacTable {
    /// Table embedded in the crate
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded table is malformed or incomplete
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_TABLE)
    }

    /// Parse a table from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The text is not valid TOML of the expected shape
    /// - A sign is missing or listed twice
    pub fn parse(text: &str) -> Result<Self> {
        let file: TableFile = toml::from_str(text).map_err(|e| PlannerError::DataTable {
            table: "zodiac",
            reason: e.to_string(),
        })?;

        for sign in ZodiacSign::ALL {
            let entries = file
                .signs
                .iter()
                .filter(|profile| profile.sign == sign)
                .count();
            if entries != 1 {
                return Err(PlannerError::DataTable {
                    table: "zodiac",
                    reason: format!("expected one entry for {sign}, found {entries}"),
                });
            }
        }

        Ok(Self {
            profiles: file.signs,
        })
    }

    /// Profile of a sign
    pub fn profile(&self, sign: ZodiacSign) -> Option<&ZodiacProfile> {
        self.profiles.iter().find(|profile| profile.sign == sign)
    }

    /// All profiles in table order
    pub fn profiles(&self) -> &[ZodiacProfile] {
        &self.profiles
    }
}

/// Standard rules refined by the owner's sign
///
/// A direction listed for the sign is favorable. Anything else falls back to
/// the standard verdict, capped at neutral.
#[derive(Debug, Clone)]
pub struct ZodiacVastu {
    profile: ZodiacProfile,
}

impl ZodiacVastu {
    /// Lookup for one sign's profile
    pub const fn new(profile: ZodiacProfile) -> Self {
        Self { profile }
    }

    /// Lookup for a sign from the embedded table
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded table cannot be read
    pub fn for_sign(sign: ZodiacSign) -> Result<Self> {
        let table = ZodiacTable::builtin()?;
        table
            .profile(sign)
            .cloned()
            .map(Self::new)
            .ok_or_else(|| PlannerError::DataTable {
                table: "zodiac",
                reason: format!("no entry for {sign}"),
            })
    }

    /// Active profile
    pub const fn profile(&self) -> &ZodiacProfile {
        &self.profile
    }
}

impl ComplianceLookup for ZodiacVastu {
    fn assess(&self, room: RoomType, direction: Direction) -> Compliance {
        if self.profile.directions.get(room).contains(&direction) {
            return Compliance {
                rating: Rating::Favorable,
                advice: format!(
                    "{} suits a {} for {}.",
                    direction.name(),
                    room.label(),
                    self.profile.name
                ),
            };
        }

        let rule = StandardVastu::rule(room);
        let rating = rule.rate(direction).cap(Rating::Neutral);
        Compliance {
            rating,
            advice: rule.advice(rating).to_string(),
        }
    }

    fn recommended(&self, room: RoomType) -> Vec<Direction> {
        self.profile.directions.get(room).to_vec()
    }
}

/// Rule set for an optional owner profile
pub fn lookup_for(profile: Option<&ZodiacProfile>) -> Box<dyn ComplianceLookup> {
    match profile {
        Some(profile) => Box::new(ZodiacVastu::new(profile.clone())),
        None => Box::new(StandardVastu),
    }
}
