//! Plant of the Week
//!
//! Picks one featured plant per (zone, ISO week). The pick is a pure
//! function of the catalog, the zone and the supplied date:
//! 1. keep plants ideal for the zone (none: first catalog plant)
//! 2. score by preference, stable sort descending
//! 3. take the top half (at least one)
//! 4. index into it with a ChaCha8 generator seeded by `iso_year * 100 + iso_week`

use crate::types::{Plant, WaterNeeds};
use crate::zone::is_ideal_for_zone;
use chrono::{Datelike, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::cmp::Reverse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        match date.month() {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyFeature {
    pub plant: Plant,
    pub year: i32,
    pub week: u32,
    pub season: Season,
    pub reasons: Vec<&'static str>,
}

fn preference_score(plant: &Plant) -> i32 {
    let mut score = 0;
    if plant.is_pollinator_friendly() {
        score += 3;
    }
    if plant.is_beginner_friendly() {
        score += 2;
    }
    if plant.is_native() {
        score += 2;
    }
    if plant.is_non_toxic() {
        score += 1;
    }
    if plant.has_image() {
        score += 1;
    }
    score
}

/// Seed shared by every day of an ISO week
pub fn week_seed(date: NaiveDate) -> u64 {
    let iso = date.iso_week();
    u64::from(iso.year().unsigned_abs()) * 100 + u64::from(iso.week())
}

pub fn plant_of_the_week(plants: &[Plant], zone: i32, today: NaiveDate) -> Option<&Plant> {
    let mut scored: Vec<(&Plant, i32)> = plants
        .iter()
        .filter(|plant| is_ideal_for_zone(plant, zone))
        .map(|plant| (plant, preference_score(plant)))
        .collect();

    if scored.is_empty() {
        tracing::debug!("No ideal plants for zone {}, falling back to first catalog plant", zone);
        return plants.first();
    }

    scored.sort_by_key(|&(_, score)| Reverse(score));

    let candidates = scored.len().div_ceil(2).max(1);
    let mut rng = ChaCha8Rng::seed_from_u64(week_seed(today));
    let index = rng.gen_range(0..candidates);

    let (plant, score) = scored[index];
    tracing::debug!(
        "Plant of the week for zone {}: {} (score {}, {} of {} candidates)",
        zone,
        plant.id,
        score,
        index + 1,
        candidates
    );
    Some(plant)
}

/// Selected plant plus the week it belongs to and display reasons
pub fn weekly_feature(plants: &[Plant], zone: i32, today: NaiveDate) -> Option<WeeklyFeature> {
    let plant = plant_of_the_week(plants, zone, today)?;
    let iso = today.iso_week();
    Some(WeeklyFeature {
        plant: plant.clone(),
        year: iso.year(),
        week: iso.week(),
        season: Season::from_date(today),
        reasons: selection_reasons(plant),
    })
}

/// Fixed-order highlights derived from the plant's attributes
pub fn selection_reasons(plant: &Plant) -> Vec<&'static str> {
    let mut reasons = Vec::new();
    if plant.is_pollinator_friendly() {
        reasons.push("Attracts beneficial pollinators");
    }
    if plant.is_native() {
        reasons.push("Native to your region");
    }
    if plant.is_beginner_friendly() {
        reasons.push("Perfect for beginners");
    }
    if plant.is_non_toxic() {
        reasons.push("Safe for pets");
    }
    if plant.water_needs == Some(WaterNeeds::Low) {
        reasons.push("Drought tolerant");
    }
    reasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_plants;
    use chrono::Duration;
    use rustc_hash::FxHashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_seed_uses_iso_year() {
        assert_eq!(week_seed(date(2024, 1, 1)), 202401);
        assert_eq!(week_seed(date(2024, 6, 12)), 202424);
        // Monday 30 Dec 2024 belongs to ISO week 1 of 2025
        assert_eq!(week_seed(date(2024, 12, 30)), 202501);
    }

    #[test]
    fn test_stable_within_iso_week() {
        let plants = seed_plants();
        let monday = date(2025, 3, 10);
        let first = plant_of_the_week(&plants, 6, monday).unwrap();
        for offset in 1..7 {
            let day = monday + Duration::days(offset);
            assert_eq!(plant_of_the_week(&plants, 6, day).unwrap().id, first.id);
        }
    }

    #[test]
    fn test_picks_from_top_half_and_varies_across_weeks() {
        let plants = seed_plants();
        // zone 6 scores: Coneflower 9, Susan 9, Butterfly Weed 8, Columbine 8,
        // Sage 7, Lavender 6; top half is the first three
        let top = ["echinacea-purpurea", "rudbeckia-hirta", "asclepias-tuberosa"];

        let mut seen = FxHashSet::default();
        let start = date(2025, 1, 6);
        for week in 0..52 {
            let day = start + Duration::weeks(week);
            let pick = plant_of_the_week(&plants, 6, day).unwrap();
            assert!(top.contains(&pick.id.as_str()), "unexpected pick {}", pick.id);
            seen.insert(pick.id.clone());
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_fallbacks() {
        let plants = seed_plants();
        // nothing is hardy in zone 12
        let fallback = plant_of_the_week(&plants, 12, date(2025, 5, 1)).unwrap();
        assert_eq!(fallback.id, plants[0].id);

        assert!(plant_of_the_week(&[], 6, date(2025, 5, 1)).is_none());
        assert!(weekly_feature(&[], 6, date(2025, 5, 1)).is_none());
    }

    #[test]
    fn test_single_candidate() {
        let plants = vec![Plant {
            zone_min: Some(5),
            zone_max: Some(7),
            ..Plant::new("only", "Only", "O o")
        }];
        for week in 0..10 {
            let day = date(2025, 1, 6) + Duration::weeks(week);
            assert_eq!(plant_of_the_week(&plants, 6, day).unwrap().id, "only");
        }
    }

    #[test]
    fn test_selection_reasons_order() {
        let plants = seed_plants();
        assert_eq!(
            selection_reasons(&plants[0]),
            vec![
                "Attracts beneficial pollinators",
                "Native to your region",
                "Perfect for beginners",
                "Safe for pets",
                "Drought tolerant"
            ]
        );
        assert!(selection_reasons(&Plant::new("x", "X", "X x")).is_empty());
    }

    #[test]
    fn test_weekly_feature_metadata() {
        let plants = seed_plants();
        let feature = weekly_feature(&plants, 6, date(2025, 7, 16)).unwrap();
        assert_eq!(feature.year, 2025);
        assert_eq!(feature.week, 29);
        assert_eq!(feature.season, Season::Summer);
        assert_eq!(feature.reasons, selection_reasons(&feature.plant));
    }

    #[test]
    fn test_seasons() {
        assert_eq!(Season::from_date(date(2025, 3, 1)), Season::Spring);
        assert_eq!(Season::from_date(date(2025, 8, 31)), Season::Summer);
        assert_eq!(Season::from_date(date(2025, 11, 30)), Season::Fall);
        assert_eq!(Season::from_date(date(2025, 12, 1)), Season::Winter);
        assert_eq!(Season::from_date(date(2025, 2, 28)), Season::Winter);
    }
}
