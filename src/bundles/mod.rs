//! Themed Plant Bundles
//!
//! Six fixed bundle kinds, all built the same way:
//! 1. keep plants passing the theme's requirements with an ideal zone match
//! 2. score = zone score + theme bonuses
//! 3. stable sort by score, descending
//! 4. take min(12, max(8, candidates)) plants

pub mod themes;

pub use themes::{BundleTheme, PlantCheck};

use crate::types::Plant;
use crate::zone::{is_ideal_for_zone, zone_score};
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Reverse;

pub const MAX_BUNDLE_SIZE: usize = 12;
pub const TARGET_BUNDLE_SIZE: usize = 8;
/// Bundles smaller than this are left out of `get_all_bundles`
pub const MIN_USEFUL_BUNDLE_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BundleKind {
    BeginnerStarter,
    PollinatorGarden,
    NativeGarden,
    ShadeGarden,
    LowWaterGarden,
    FullSunGarden,
}

impl BundleKind {
    /// Display order
    pub const ALL: [BundleKind; 6] = [
        BundleKind::BeginnerStarter,
        BundleKind::PollinatorGarden,
        BundleKind::NativeGarden,
        BundleKind::ShadeGarden,
        BundleKind::LowWaterGarden,
        BundleKind::FullSunGarden,
    ];

    pub fn theme(&self) -> &'static BundleTheme {
        match self {
            BundleKind::BeginnerStarter => &themes::BEGINNER_STARTER,
            BundleKind::PollinatorGarden => &themes::POLLINATOR_GARDEN,
            BundleKind::NativeGarden => &themes::NATIVE_GARDEN,
            BundleKind::ShadeGarden => &themes::SHADE_GARDEN,
            BundleKind::LowWaterGarden => &themes::LOW_WATER_GARDEN,
            BundleKind::FullSunGarden => &themes::FULL_SUN_GARDEN,
        }
    }

    pub fn id(&self) -> &'static str {
        self.theme().id
    }

    /// Look up a kind by its bundle id ("shade-garden", ...)
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlantBundle {
    pub id: String,
    pub name: String,
    pub description: String,
    pub plants: Vec<Plant>,
    pub criteria: Vec<String>,
}

/// Zone score plus the theme's bonuses
pub fn theme_score(theme: &BundleTheme, plant: &Plant, zone: i32) -> i32 {
    zone_score(plant, zone) + theme.bonus(plant)
}

/// Number of plants a bundle takes from `candidates` scored plants
fn bundle_size(candidates: usize) -> usize {
    MAX_BUNDLE_SIZE.min(TARGET_BUNDLE_SIZE.max(candidates)).min(candidates)
}

pub fn build_bundle(plants: &[Plant], kind: BundleKind, zone: i32) -> PlantBundle {
    let theme = kind.theme();

    let mut scored: Vec<(&Plant, i32)> = plants
        .iter()
        .filter(|plant| theme.accepts(plant) && is_ideal_for_zone(plant, zone))
        .map(|plant| (plant, theme_score(theme, plant, zone)))
        .collect();

    scored.sort_by_key(|&(_, score)| Reverse(score));

    let count = bundle_size(scored.len());
    PlantBundle {
        id: theme.id.to_string(),
        name: theme.name.to_string(),
        description: theme.description.to_string(),
        plants: scored
            .into_iter()
            .take(count)
            .map(|(plant, _)| plant.clone())
            .collect(),
        criteria: theme.criteria.iter().map(|c| c.to_string()).collect(),
    }
}

pub fn beginner_starter_pack(plants: &[Plant], zone: i32) -> PlantBundle {
    build_bundle(plants, BundleKind::BeginnerStarter, zone)
}

pub fn pollinator_garden_pack(plants: &[Plant], zone: i32) -> PlantBundle {
    build_bundle(plants, BundleKind::PollinatorGarden, zone)
}

pub fn native_garden_pack(plants: &[Plant], zone: i32) -> PlantBundle {
    build_bundle(plants, BundleKind::NativeGarden, zone)
}

pub fn shade_garden_pack(plants: &[Plant], zone: i32) -> PlantBundle {
    build_bundle(plants, BundleKind::ShadeGarden, zone)
}

pub fn low_water_garden_pack(plants: &[Plant], zone: i32) -> PlantBundle {
    build_bundle(plants, BundleKind::LowWaterGarden, zone)
}

pub fn full_sun_garden_pack(plants: &[Plant], zone: i32) -> PlantBundle {
    build_bundle(plants, BundleKind::FullSunGarden, zone)
}

/// Every bundle with at least three plants, in display order
///
/// Themes are independent, so they are built in parallel; `collect`
/// keeps the `ALL` order.
pub fn get_all_bundles(plants: &[Plant], zone: i32) -> Vec<PlantBundle> {
    let bundles: Vec<PlantBundle> = BundleKind::ALL
        .par_iter()
        .map(|&kind| build_bundle(plants, kind, zone))
        .collect();

    bundles
        .into_iter()
        .filter(|bundle| {
            let keep = bundle.plants.len() >= MIN_USEFUL_BUNDLE_SIZE;
            if !keep {
                tracing::debug!(
                    "Dropping bundle '{}' for zone {}: only {} plants",
                    bundle.id,
                    zone,
                    bundle.plants.len()
                );
            }
            keep
        })
        .collect()
}
