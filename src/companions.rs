//! Companion Plant Recommendations
//!
//! Scores every other catalog plant against a reference plant:
//!
//! | Signal                         | Points |
//! |--------------------------------|--------|
//! | zone score of the candidate    | 0-100  |
//! | each shared sun exposure       | +25    |
//! | same water needs               | +30    |
//! | both native                    | +40    |
//! | both pollinator-friendly       | +35    |
//! | different plant types          | +15    |
//!
//! Unlike plants score higher on type, rewarding a varied planting.
//! Water and type compare as recorded, so two unknown water needs match
//! and a known type differs from an unknown one.

use crate::types::Plant;
use crate::zone::zone_score;
use std::cmp::Reverse;

pub const DEFAULT_COMPANION_LIMIT: usize = 6;

const SHARED_SUN_POINTS: i32 = 25;
const SAME_WATER_POINTS: i32 = 30;
const BOTH_NATIVE_POINTS: i32 = 40;
const BOTH_POLLINATOR_POINTS: i32 = 35;
const TYPE_DIVERSITY_POINTS: i32 = 15;

pub fn companion_score(plant: &Plant, candidate: &Plant, zone: i32) -> i32 {
    let mut score = zone_score(candidate, zone);

    let shared_sun = plant
        .sun_exposure
        .iter()
        .filter(|exposure| candidate.sun_exposure.contains(exposure))
        .count() as i32;
    score += SHARED_SUN_POINTS * shared_sun;

    if plant.water_needs == candidate.water_needs {
        score += SAME_WATER_POINTS;
    }

    if plant.is_native() && candidate.is_native() {
        score += BOTH_NATIVE_POINTS;
    }

    if plant.is_pollinator_friendly() && candidate.is_pollinator_friendly() {
        score += BOTH_POLLINATOR_POINTS;
    }

    if plant.plant_type != candidate.plant_type {
        score += TYPE_DIVERSITY_POINTS;
    }

    score
}

/// Up to `limit` companions for `plant`, best first (stable on catalog order)
pub fn companion_plants<'a>(plants: &'a [Plant], plant: &Plant, zone: i32, limit: usize) -> Vec<&'a Plant> {
    let mut scored: Vec<(&Plant, i32)> = plants
        .iter()
        .filter(|candidate| candidate.id != plant.id)
        .map(|candidate| (candidate, companion_score(plant, candidate, zone)))
        .collect();

    scored.sort_by_key(|&(_, score)| Reverse(score));

    scored
        .into_iter()
        .take(limit)
        .map(|(candidate, _)| candidate)
        .collect()
}
