// Recommendation Integration Tests
//
// Purpose: End-to-end behaviour of ranking, filtering, bundles, companions
// and the weekly pick through the public API
// Run with: cargo test --test recommendation_integration_tests

use chrono::NaiveDate;
use zone_ranker_rust::bundles::MIN_USEFUL_BUNDLE_SIZE;
use zone_ranker_rust::{
    companion_plants, filter_plants, get_all_bundles, plant_of_the_week, rank_plants, search_plants,
    sort_by_zone_score, zone_score, BundleKind, Plant, PlantCatalog, PlantFilters, PlantType,
    SunExposure, ToxicityToPets, WaterNeeds, build_bundle,
};

// Helper: deterministic synthetic catalog covering every attribute combination
fn generated_catalog(count: usize) -> Vec<Plant> {
    let exposures = [SunExposure::FullSun, SunExposure::PartSun, SunExposure::Shade];
    let waters = [WaterNeeds::Low, WaterNeeds::Medium, WaterNeeds::High];
    let types = [PlantType::Perennial, PlantType::Shrub, PlantType::Tree, PlantType::Annual];
    let toxicity = [ToxicityToPets::Toxic, ToxicityToPets::NonToxic, ToxicityToPets::Unknown];

    (0..count)
        .map(|i| {
            let zone_min = 1 + (i % 7) as i32;
            let flag = |n: usize| match i % n {
                0 => None,
                1 => Some(false),
                _ => Some(true),
            };
            Plant {
                zone_min: if i % 11 == 0 { None } else { Some(zone_min) },
                zone_max: if i % 11 == 0 { None } else { Some(zone_min + (i % 5) as i32) },
                is_native: flag(3),
                is_pollinator_friendly: flag(4),
                beginner_friendly: flag(5),
                toxicity_to_pets: toxicity[i % 3],
                sun_exposure: std::iter::once(exposures[i % 3]).collect(),
                water_needs: if i % 13 == 0 { None } else { Some(waters[i % 3]) },
                plant_type: Some(types[i % 4]),
                ..Plant::new(&format!("plant-{i:03}"), &format!("Plant {i:03}"), "Genus species")
            }
        })
        .collect()
}

fn ids(plants: &[&Plant]) -> Vec<String> {
    plants.iter().map(|p| p.id.clone()).collect()
}

// =========================================================================
// Section 1: Zone scoring and ranking properties
// =========================================================================

#[test]
fn test_zone_scores_are_bounded() {
    for plant in generated_catalog(60) {
        for zone in 0..=14 {
            assert!(matches!(zone_score(&plant, zone), 0 | 50 | 100));
        }
    }
}

#[test]
fn test_sort_by_zone_score_is_idempotent_and_ordered() {
    let plants = generated_catalog(80);
    for zone in 1..=13 {
        let once = sort_by_zone_score(&plants, zone);
        let twice = sort_by_zone_score(once.clone(), zone);
        assert_eq!(ids(&once), ids(&twice));
        assert!(once
            .windows(2)
            .all(|w| zone_score(w[0], zone) >= zone_score(w[1], zone)));
    }
}

#[test]
fn test_seed_catalog_zone_six_ranking() {
    let catalog = PlantCatalog::seed();
    let names: Vec<&str> = rank_plants(catalog.plants(), Some(6))
        .iter()
        .map(|p| p.common_name.as_str())
        .collect();

    // every seed plant is ideal for zone 6, natives first then alphabetical
    assert_eq!(
        names,
        vec![
            "Black-Eyed Susan",
            "Butterfly Weed",
            "Purple Coneflower",
            "Wild Columbine",
            "English Lavender",
            "Woodland Sage"
        ]
    );
}

#[test]
fn test_zone_search_then_filter() {
    let catalog = PlantCatalog::seed();
    let found = search_plants(&catalog, "z8", None);
    let filters = PlantFilters {
        exclude_toxic_to_pets: true,
        ..Default::default()
    };
    let names: Vec<&str> = filter_plants(found, &filters)
        .iter()
        .map(|p| p.common_name.as_str())
        .collect();
    assert_eq!(names, vec!["Purple Coneflower", "Woodland Sage"]);
}

// =========================================================================
// Section 2: Filters
// =========================================================================

#[test]
fn test_filter_and_composition() {
    let plants = generated_catalog(90);
    let filters = PlantFilters {
        native_only: true,
        exclude_toxic_to_pets: true,
        ..Default::default()
    };
    let result = filter_plants(&plants, &filters);
    assert!(!result.is_empty());
    for plant in result {
        assert_eq!(plant.is_native, Some(true));
        assert_ne!(plant.toxicity_to_pets, ToxicityToPets::Toxic);
    }
}

// =========================================================================
// Section 3: Bundles
// =========================================================================

#[test]
fn test_bundle_sizes_on_large_catalog() {
    let plants = generated_catalog(400);
    for kind in BundleKind::ALL {
        let bundle = build_bundle(&plants, kind, 5);
        assert_eq!(bundle.plants.len(), 12, "bundle {}", bundle.id);
        assert!(bundle.plants.iter().all(|p| zone_score(p, 5) == 100));
    }
}

#[test]
fn test_get_all_bundles_never_returns_sparse_bundles() {
    let plants = generated_catalog(25);
    for zone in 1..=13 {
        for bundle in get_all_bundles(&plants, zone) {
            assert!(bundle.plants.len() >= MIN_USEFUL_BUNDLE_SIZE);
        }
    }
}

// =========================================================================
// Section 4: Companions and weekly pick
// =========================================================================

#[test]
fn test_companions_exclude_self() {
    let plants = generated_catalog(40);
    for target in plants.iter().take(10) {
        let companions = companion_plants(&plants, target, 6, 4);
        assert_eq!(companions.len(), 4);
        assert!(companions.iter().all(|p| p.id != target.id));
    }
}

#[test]
fn test_weekly_pick_is_stable_within_week_and_ideal() {
    let plants = generated_catalog(120);
    // Monday 2 June 2025 .. Sunday 8 June 2025
    let monday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
    for zone in 1..=8 {
        let pick = plant_of_the_week(&plants, zone, monday).unwrap();
        assert_eq!(zone_score(pick, zone), 100);
        for day in monday.iter_days().take(7) {
            assert_eq!(plant_of_the_week(&plants, zone, day).unwrap().id, pick.id);
        }
    }
}
