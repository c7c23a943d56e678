//! Search intent detection
//!
//! Before fuzzy matching, a query is checked against recognised shapes in a
//! fixed order; the first hit wins:
//!   1. zone number ("zone 6", "zone:6", "z6") with 1 <= n <= 13
//!   2. attribute keyword contained in the query (priority order below)
//!   3. otherwise free text

use crate::types::{Plant, SunExposure, WaterNeeds};
use crate::zone::{MAX_ZONE, MIN_ZONE};
use regex::Regex;
use std::sync::LazyLock;

static ZONE_QUERY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:zone\s*:?\s*|z)(\d{1,2})$").expect("valid zone regex"));

/// Single-attribute filters reachable from a keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKeyword {
    Native,
    Pollinator,
    Toxic,
    NonToxic,
    Beginner,
    FullSun,
    PartSun,
    Shade,
    LowWater,
    MediumWater,
    HighWater,
}

/// (phrases, keyword) in evaluation order
const KEYWORDS: &[(&[&str], AttributeKeyword)] = &[
    (&["native"], AttributeKeyword::Native),
    (&["pollinator"], AttributeKeyword::Pollinator),
    (&["toxic"], AttributeKeyword::Toxic),
    (&["non-toxic"], AttributeKeyword::NonToxic),
    (&["pet safe", "pet friendly"], AttributeKeyword::NonToxic),
    (&["beginner"], AttributeKeyword::Beginner),
    (&["full sun"], AttributeKeyword::FullSun),
    (&["part sun"], AttributeKeyword::PartSun),
    (&["shade"], AttributeKeyword::Shade),
    (&["low water", "drought"], AttributeKeyword::LowWater),
    (&["medium water"], AttributeKeyword::MediumWater),
    (&["high water"], AttributeKeyword::HighWater),
];

/// Negated forms that must not trigger the bare "toxic" keyword
const NON_TOXIC_FORMS: &[&str] = &["non-toxic", "nontoxic", "non toxic"];

impl AttributeKeyword {
    pub fn matches(&self, plant: &Plant) -> bool {
        match self {
            AttributeKeyword::Native => plant.is_native(),
            AttributeKeyword::Pollinator => plant.is_pollinator_friendly(),
            AttributeKeyword::Toxic => plant.is_toxic(),
            AttributeKeyword::NonToxic => plant.is_non_toxic(),
            AttributeKeyword::Beginner => plant.is_beginner_friendly(),
            AttributeKeyword::FullSun => plant.has_sun_exposure(SunExposure::FullSun),
            AttributeKeyword::PartSun => plant.has_sun_exposure(SunExposure::PartSun),
            AttributeKeyword::Shade => plant.has_sun_exposure(SunExposure::Shade),
            AttributeKeyword::LowWater => plant.water_needs == Some(WaterNeeds::Low),
            AttributeKeyword::MediumWater => plant.water_needs == Some(WaterNeeds::Medium),
            AttributeKeyword::HighWater => plant.water_needs == Some(WaterNeeds::High),
        }
    }

    fn detect(query: &str) -> Option<Self> {
        let negated_toxic = NON_TOXIC_FORMS.iter().any(|form| query.contains(form));

        KEYWORDS
            .iter()
            .filter(|(_, keyword)| !(negated_toxic && *keyword == AttributeKeyword::Toxic))
            .find(|(phrases, _)| phrases.iter().any(|phrase| query.contains(phrase)))
            .map(|(_, keyword)| *keyword)
            .or_else(|| negated_toxic.then_some(AttributeKeyword::NonToxic))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchIntent {
    Empty,
    Zone(i32),
    Attribute(AttributeKeyword),
    FreeText(String),
}

impl SearchIntent {
    pub fn parse(query: &str) -> Self {
        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() {
            return SearchIntent::Empty;
        }

        if let Some(zone) = parse_zone_query(&normalized) {
            return SearchIntent::Zone(zone);
        }

        if let Some(keyword) = AttributeKeyword::detect(&normalized) {
            return SearchIntent::Attribute(keyword);
        }

        SearchIntent::FreeText(normalized)
    }
}

fn parse_zone_query(query: &str) -> Option<i32> {
    let captures = ZONE_QUERY.captures(query)?;
    let zone: i32 = captures.get(1)?.as_str().parse().ok()?;
    (MIN_ZONE..=MAX_ZONE).contains(&zone).then_some(zone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_patterns() {
        assert_eq!(SearchIntent::parse("zone 6"), SearchIntent::Zone(6));
        assert_eq!(SearchIntent::parse("Zone:11"), SearchIntent::Zone(11));
        assert_eq!(SearchIntent::parse("  z3 "), SearchIntent::Zone(3));
        assert_eq!(SearchIntent::parse("ZONE 13"), SearchIntent::Zone(13));
    }

    #[test]
    fn test_out_of_range_zone_is_not_a_zone_query() {
        assert_eq!(SearchIntent::parse("zone 14"), SearchIntent::FreeText("zone 14".to_string()));
        assert_eq!(SearchIntent::parse("z0"), SearchIntent::FreeText("z0".to_string()));
    }

    #[test]
    fn test_keyword_priority_order() {
        assert_eq!(
            SearchIntent::parse("native pollinator plants"),
            SearchIntent::Attribute(AttributeKeyword::Native)
        );
        assert_eq!(
            SearchIntent::parse("pollinator shade"),
            SearchIntent::Attribute(AttributeKeyword::Pollinator)
        );
        assert_eq!(
            SearchIntent::parse("Beginner full sun"),
            SearchIntent::Attribute(AttributeKeyword::Beginner)
        );
    }

    #[test]
    fn test_toxic_variants() {
        assert_eq!(SearchIntent::parse("toxic"), SearchIntent::Attribute(AttributeKeyword::Toxic));
        assert_eq!(
            SearchIntent::parse("non-toxic"),
            SearchIntent::Attribute(AttributeKeyword::NonToxic)
        );
        assert_eq!(
            SearchIntent::parse("nontoxic flowers"),
            SearchIntent::Attribute(AttributeKeyword::NonToxic)
        );
        assert_eq!(
            SearchIntent::parse("pet friendly"),
            SearchIntent::Attribute(AttributeKeyword::NonToxic)
        );
        assert_eq!(
            SearchIntent::parse("pet safe"),
            SearchIntent::Attribute(AttributeKeyword::NonToxic)
        );
    }

    #[test]
    fn test_water_aliases() {
        assert_eq!(
            SearchIntent::parse("drought tolerant"),
            SearchIntent::Attribute(AttributeKeyword::LowWater)
        );
        assert_eq!(
            SearchIntent::parse("high water"),
            SearchIntent::Attribute(AttributeKeyword::HighWater)
        );
        assert_eq!(
            SearchIntent::parse("part sun"),
            SearchIntent::Attribute(AttributeKeyword::PartSun)
        );
    }

    #[test]
    fn test_free_text_and_empty() {
        assert_eq!(SearchIntent::parse("   "), SearchIntent::Empty);
        assert_eq!(
            SearchIntent::parse("Purple Coneflower"),
            SearchIntent::FreeText("purple coneflower".to_string())
        );
    }

    #[test]
    fn test_keyword_matches_plant() {
        let plant = Plant {
            is_native: Some(true),
            water_needs: Some(WaterNeeds::Low),
            ..Plant::new("a", "A", "A a")
        };
        assert!(AttributeKeyword::Native.matches(&plant));
        assert!(AttributeKeyword::LowWater.matches(&plant));
        assert!(!AttributeKeyword::Pollinator.matches(&plant));
        assert!(!AttributeKeyword::NonToxic.matches(&plant));
        assert!(!AttributeKeyword::Toxic.matches(&plant));
    }
}
