//! Vastu direction compliance
//!
//! This module contains:
//! - The standard rule table and the lookup trait
//! - Zodiac-specific recommendations
//! - Report assembly and scoring

/// Report assembly, scoring and recommendations
pub mod report;
/// Ratings, the lookup trait and the standard rule table
pub mod rules;
/// Zodiac signs and their recommendations
pub mod zodiac;

pub use report::{PlanReport, fill_missing_directions};
pub use rules::{Compliance, ComplianceLookup, Rating, StandardVastu};
pub use zodiac::{ZodiacProfile, ZodiacSign, ZodiacTable, ZodiacVastu, lookup_for};
