//! Attribute Filtering
//!
//! Narrows a plant list by the browse-page filter selection.
//!
//! Missing-data policy: an unknown attribute never excludes a plant, except
//! for the "only" flags (native, pollinator-friendly, beginner-friendly),
//! which ask for a confirmed yes. `exclude_toxic_to_pets` removes only
//! plants confirmed toxic.

use crate::types::{Plant, PlantFilters};
use crate::zone::range_contains;

/// Plants passing every active filter, in input order
pub fn filter_plants<'a, I>(plants: I, filters: &PlantFilters) -> Vec<&'a Plant>
where
    I: IntoIterator<Item = &'a Plant>,
{
    plants
        .into_iter()
        .filter(|plant| matches_filters(plant, filters))
        .collect()
}

pub fn matches_filters(plant: &Plant, filters: &PlantFilters) -> bool {
    // Zone: plants without a recorded range stay visible
    if let Some(zone) = filters.zone {
        if plant.zone_range().is_some() && !range_contains(plant, zone) {
            return false;
        }
    }

    if filters.native_only && !plant.is_native() {
        return false;
    }

    if filters.pollinator_friendly_only && !plant.is_pollinator_friendly() {
        return false;
    }

    if filters.exclude_toxic_to_pets && plant.is_toxic() {
        return false;
    }

    // Sun exposure: any selected value; no recorded exposure passes
    if !filters.sun_exposure.is_empty()
        && !plant.sun_exposure.is_empty()
        && !plant
            .sun_exposure
            .iter()
            .any(|exposure| filters.sun_exposure.contains(exposure))
    {
        return false;
    }

    if !filters.plant_type.is_empty() {
        if let Some(plant_type) = plant.plant_type {
            if !filters.plant_type.contains(&plant_type) {
                return false;
            }
        }
    }

    if let (Some(wanted), Some(actual)) = (filters.water_needs, plant.water_needs) {
        if wanted != actual {
            return false;
        }
    }

    if filters.beginner_friendly_only && !plant.is_beginner_friendly() {
        return false;
    }

    true
}

/// Starter plants hand-picked for `zone`
///
/// Zone filter first (unknown ranges pass), then the curated list.
pub fn curated_plants_for_zone<'a, I>(plants: I, zone: i32) -> Vec<&'a Plant>
where
    I: IntoIterator<Item = &'a Plant>,
{
    let zone_filter = PlantFilters {
        zone: Some(zone),
        ..Default::default()
    };

    filter_plants(plants, &zone_filter)
        .into_iter()
        .filter(|plant| plant.curated_for_zones.contains(&zone))
        .collect()
}
