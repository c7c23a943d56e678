//! Attribute Inference
//!
//! Fills gaps in freshly loaded plant records from related attributes.
//! Explicit values always win; inference only supplies what is missing.
//! Runs once in the catalog loader, never inside scoring.

use crate::types::{Plant, PlantType, SunExposure, SunExposureSet, WaterNeeds};
use smallvec::smallvec;

/// Points needed before an unlabelled plant counts as beginner-friendly
const BEGINNER_THRESHOLD: i32 = 3;

/// Temperate band a widely adaptable plant should cover
const COMMON_ZONE_LOW: i32 = 5;
const COMMON_ZONE_HIGH: i32 = 7;

pub fn infer_beginner_friendly(plant: &Plant) -> bool {
    if let Some(explicit) = plant.beginner_friendly {
        return explicit;
    }

    let mut score = 0;

    if plant.is_native() {
        score += 2;
    }

    if matches!(
        plant.drought_tolerance.as_deref().map(str::to_lowercase).as_deref(),
        Some("medium" | "high")
    ) {
        score += 1;
    }

    if matches!(plant.water_needs, Some(WaterNeeds::Low | WaterNeeds::Medium)) {
        score += 1;
    }

    if let Some((min, max)) = plant.zone_range() {
        if min <= COMMON_ZONE_LOW && max >= COMMON_ZONE_HIGH {
            score += 1;
        }
    }

    if plant.plant_type == Some(PlantType::Perennial) {
        score += 1;
    }

    if plant.has_sun_exposure(SunExposure::FullSun) {
        score += 1;
    }

    score >= BEGINNER_THRESHOLD
}

pub fn infer_pollinator_friendly(plant: &Plant) -> bool {
    if let Some(explicit) = plant.is_pollinator_friendly {
        return explicit;
    }

    if !plant.pollinators.is_empty() {
        return true;
    }

    // Native flowering plants usually feed local pollinators
    plant.is_native() && plant.bloom_period.is_some()
}

/// USDA drought tolerance → watering needs (inverse scale)
pub fn infer_water_needs(drought_tolerance: &str) -> Option<WaterNeeds> {
    match drought_tolerance.trim().to_lowercase().as_str() {
        "high" => Some(WaterNeeds::Low),
        "medium" => Some(WaterNeeds::Medium),
        "low" | "none" => Some(WaterNeeds::High),
        _ => None,
    }
}

/// USDA shade tolerance → sun exposure set
pub fn infer_sun_exposure(shade_tolerance: &str) -> Option<SunExposureSet> {
    match shade_tolerance.trim().to_lowercase().as_str() {
        "intolerant" => Some(smallvec![SunExposure::FullSun]),
        "intermediate" => Some(smallvec![SunExposure::FullSun, SunExposure::PartSun]),
        "tolerant" => Some(smallvec![SunExposure::PartSun, SunExposure::Shade]),
        _ => None,
    }
}

/// Make a zone range usable: copy a lone bound, swap inverted bounds
pub fn normalize_zone_range(zone_min: Option<i32>, zone_max: Option<i32>) -> (Option<i32>, Option<i32>) {
    match (zone_min, zone_max) {
        (Some(min), Some(max)) if min > max => (Some(max), Some(min)),
        (Some(min), None) => (Some(min), Some(min)),
        (None, Some(max)) => (Some(max), Some(max)),
        other => other,
    }
}

/// Apply every inference rule and return the enriched record.
///
/// Flags are scored from the record as loaded, before water, sun or zone
/// gaps are filled.
pub fn apply_inference(mut plant: Plant) -> Plant {
    plant.beginner_friendly = Some(infer_beginner_friendly(&plant));
    plant.is_pollinator_friendly = Some(infer_pollinator_friendly(&plant));

    if plant.water_needs.is_none() {
        if let Some(tolerance) = plant.drought_tolerance.as_deref() {
            plant.water_needs = infer_water_needs(tolerance);
        }
    }

    if plant.sun_exposure.is_empty() {
        if let Some(inferred) = plant.shade_tolerance.as_deref().and_then(infer_sun_exposure) {
            plant.sun_exposure = inferred;
        }
    }

    let (zone_min, zone_max) = normalize_zone_range(plant.zone_min, plant.zone_max);
    plant.zone_min = zone_min;
    plant.zone_max = zone_max;

    plant
}
