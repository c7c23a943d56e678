//! Hardiness Zone Scoring
//!
//! Scores how well a plant's USDA hardiness range fits a target zone and
//! resolves zone labels ("7b") and ZIP codes to zone numbers.
//!
//! Score scale:
//! - 100: target zone inside the plant's inclusive range
//! - 50:  target zone one step outside either bound, or range unknown
//! - 0:   anything further away
//!
//! Zones are not validated here. Out-of-range zones simply score 0 against
//! every plant with a known range.

use crate::error::ZoneError;
use crate::types::Plant;
use serde::Serialize;

pub const MIN_ZONE: i32 = 1;
pub const MAX_ZONE: i32 = 13;

pub const IDEAL_SCORE: i32 = 100;
pub const CLOSE_SCORE: i32 = 50;
pub const UNKNOWN_SCORE: i32 = 50;
pub const POOR_SCORE: i32 = 0;

/// How a plant's hardiness range relates to a target zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneMatch {
    /// Target zone lies within [zone_min, zone_max]
    Ideal,

    /// Target zone is exactly one away from a bound
    Close,

    /// Plant is missing one or both bounds
    Unknown,

    /// Target zone is two or more away from the range
    Poor,
}

impl ZoneMatch {
    pub fn classify(plant: &Plant, zone: i32) -> Self {
        let Some((min, max)) = plant.zone_range() else {
            return ZoneMatch::Unknown;
        };

        if zone >= min && zone <= max {
            ZoneMatch::Ideal
        } else if (zone - min).abs() == 1 || (zone - max).abs() == 1 {
            ZoneMatch::Close
        } else {
            ZoneMatch::Poor
        }
    }

    pub fn score(&self) -> i32 {
        match self {
            ZoneMatch::Ideal => IDEAL_SCORE,
            ZoneMatch::Close => CLOSE_SCORE,
            ZoneMatch::Unknown => UNKNOWN_SCORE,
            ZoneMatch::Poor => POOR_SCORE,
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            ZoneMatch::Ideal => "Thrives in your zone",
            ZoneMatch::Close => "Borderline for your zone",
            ZoneMatch::Unknown => "Hardiness range not recorded",
            ZoneMatch::Poor => "Not suited to your zone",
        }
    }
}

/// Compatibility score of `plant` for `zone`: always 0, 50 or 100
pub fn zone_score(plant: &Plant, zone: i32) -> i32 {
    ZoneMatch::classify(plant, zone).score()
}

pub fn is_ideal_for_zone(plant: &Plant, zone: i32) -> bool {
    zone_score(plant, zone) == IDEAL_SCORE
}

pub fn is_close_to_zone(plant: &Plant, zone: i32) -> bool {
    zone_score(plant, zone) >= CLOSE_SCORE
}

/// Plant has a known range containing `zone`
pub fn range_contains(plant: &Plant, zone: i32) -> bool {
    plant
        .zone_range()
        .is_some_and(|(min, max)| zone >= min && zone <= max)
}

/// Reject zones outside 1-13 (used by callers before scoring)
pub fn validate_zone(zone: i32) -> Result<i32, ZoneError> {
    if (MIN_ZONE..=MAX_ZONE).contains(&zone) {
        Ok(zone)
    } else {
        Err(ZoneError::OutOfRange(zone))
    }
}

// ============================================================================
// Zone labels and ZIP lookup
// ============================================================================

/// Resolved hardiness zone for a ZIP code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneInfo {
    pub zip: String,
    pub zone: String,
    pub zone_number: i32,
    pub zone_letter: Option<char>,
}

impl ZoneInfo {
    fn from_label(zip: &str, label: &str) -> Result<Self, ZoneError> {
        let (zone_number, zone_letter) = parse_zone_label(label)?;
        Ok(Self {
            zip: zip.to_string(),
            zone: label.to_string(),
            zone_number,
            zone_letter,
        })
    }
}

/// Parse labels like "7", "7b" or "10a" into (number, half-zone letter)
pub fn parse_zone_label(label: &str) -> Result<(i32, Option<char>), ZoneError> {
    let trimmed = label.trim().to_lowercase();
    let invalid = || ZoneError::InvalidLabel(label.to_string());

    let (digits, letter) = match trimmed.chars().last() {
        Some(c @ ('a' | 'b')) => (&trimmed[..trimmed.len() - 1], Some(c)),
        Some(c) if c.is_ascii_digit() => (trimmed.as_str(), None),
        _ => return Err(invalid()),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let number: i32 = digits.parse().map_err(|_| invalid())?;
    if !(MIN_ZONE..=MAX_ZONE).contains(&number) {
        return Err(invalid());
    }

    Ok((number, letter))
}

/// Known ZIP → zone label pairs
const ZIP_ZONES: &[(&str, &str)] = &[
    ("10001", "7b"),
    ("90210", "10b"),
    ("60601", "6a"),
    ("02108", "6b"),
    ("33101", "10b"),
    ("98101", "9a"),
    ("78701", "9a"),
    ("30301", "8a"),
    ("80201", "5b"),
    ("85001", "9b"),
];

/// Coarse ZIP-prefix ranges for codes missing from the table: (low, high, label)
const ZIP_RANGE_ZONES: &[(u32, u32, &str)] = &[
    (85_000, 99_999, "9a"),
    (70_000, 84_999, "7b"),
    (60_000, 69_999, "5b"),
    (30_000, 59_999, "7a"),
    (20_000, 29_999, "7a"),
];

const FALLBACK_ZONE_LABEL: &str = "6a";

/// Resolve a 5-digit US ZIP code to a hardiness zone
///
/// Exact table hits first, then ZIP ranges, then zone 6a.
pub fn lookup_zip(zip: &str) -> Result<ZoneInfo, ZoneError> {
    let zip = zip.trim();
    if zip.len() != 5 || !zip.chars().all(|c| c.is_ascii_digit()) {
        return Err(ZoneError::InvalidZip(zip.to_string()));
    }

    if let Some((_, label)) = ZIP_ZONES.iter().find(|(known, _)| *known == zip) {
        return ZoneInfo::from_label(zip, label);
    }

    let zip_num: u32 = zip
        .parse()
        .map_err(|_| ZoneError::InvalidZip(zip.to_string()))?;

    let label = ZIP_RANGE_ZONES
        .iter()
        .find(|(low, high, _)| (*low..=*high).contains(&zip_num))
        .map(|(_, _, label)| *label)
        .unwrap_or(FALLBACK_ZONE_LABEL);

    ZoneInfo::from_label(zip, label)
}
