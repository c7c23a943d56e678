//! Plant record and the categorical attributes used for ranking.
//!
//! Records arrive from the catalog loader as camelCase JSON with
//! kebab-case enum values (`"full-sun"`, `"non-toxic"`). Optional booleans
//! keep `None` distinct from `Some(false)`: unknown is not the same as no.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Light conditions a plant tolerates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SunExposure {
    FullSun,
    PartSun,
    Shade,
}

impl SunExposure {
    pub fn as_str(&self) -> &'static str {
        match self {
            SunExposure::FullSun => "full-sun",
            SunExposure::PartSun => "part-sun",
            SunExposure::Shade => "shade",
        }
    }

    /// Parse the kebab-case wire value
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "full-sun" => Some(SunExposure::FullSun),
            "part-sun" => Some(SunExposure::PartSun),
            "shade" => Some(SunExposure::Shade),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WaterNeeds {
    Low,
    Medium,
    High,
}

impl WaterNeeds {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterNeeds::Low => "low",
            WaterNeeds::Medium => "medium",
            WaterNeeds::High => "high",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "low" => Some(WaterNeeds::Low),
            "medium" => Some(WaterNeeds::Medium),
            "high" => Some(WaterNeeds::High),
            _ => None,
        }
    }
}

/// Growth habit category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlantType {
    Tree,
    Shrub,
    Perennial,
    Annual,
    Vine,
    Groundcover,
    Grass,
    Herb,
    Vegetable,
    Fruit,
}

impl PlantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlantType::Tree => "tree",
            PlantType::Shrub => "shrub",
            PlantType::Perennial => "perennial",
            PlantType::Annual => "annual",
            PlantType::Vine => "vine",
            PlantType::Groundcover => "groundcover",
            PlantType::Grass => "grass",
            PlantType::Herb => "herb",
            PlantType::Vegetable => "vegetable",
            PlantType::Fruit => "fruit",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "tree" => Some(PlantType::Tree),
            "shrub" => Some(PlantType::Shrub),
            "perennial" => Some(PlantType::Perennial),
            "annual" => Some(PlantType::Annual),
            "vine" => Some(PlantType::Vine),
            "groundcover" => Some(PlantType::Groundcover),
            "grass" => Some(PlantType::Grass),
            "herb" => Some(PlantType::Herb),
            "vegetable" => Some(PlantType::Vegetable),
            "fruit" => Some(PlantType::Fruit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToxicityToPets {
    Toxic,
    NonToxic,
    #[default]
    Unknown,
}

/// Inclusive soil pH range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilPhRange {
    pub min: f64,
    pub max: f64,
}

/// Sun exposure values carried by a plant (at most three)
pub type SunExposureSet = SmallVec<[SunExposure; 3]>;

/// Catalog plant record
///
/// Read-only to every ranking, bundle and recommendation function.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: String,
    pub common_name: String,
    pub scientific_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Inclusive USDA hardiness range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_min: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_max: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_native: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pollinator_friendly: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beginner_friendly: Option<bool>,
    #[serde(default)]
    pub toxicity_to_pets: ToxicityToPets,

    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub sun_exposure: SunExposureSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_needs: Option<WaterNeeds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plant_type: Option<PlantType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_ph_range: Option<SoilPhRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bloom_period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing_inches: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planting_depth_inches: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspca_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub curated_for_zones: Vec<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pollinators: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_use: Option<String>,

    // Raw USDA ratings, consumed only by loader inference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drought_tolerance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shade_tolerance: Option<String>,
}

impl Plant {
    pub fn new(id: &str, common_name: &str, scientific_name: &str) -> Self {
        Self {
            id: id.to_string(),
            common_name: common_name.to_string(),
            scientific_name: scientific_name.to_string(),
            ..Default::default()
        }
    }

    pub fn is_native(&self) -> bool {
        self.is_native == Some(true)
    }

    pub fn is_pollinator_friendly(&self) -> bool {
        self.is_pollinator_friendly == Some(true)
    }

    pub fn is_beginner_friendly(&self) -> bool {
        self.beginner_friendly == Some(true)
    }

    pub fn is_toxic(&self) -> bool {
        self.toxicity_to_pets == ToxicityToPets::Toxic
    }

    pub fn is_non_toxic(&self) -> bool {
        self.toxicity_to_pets == ToxicityToPets::NonToxic
    }

    pub fn has_sun_exposure(&self, exposure: SunExposure) -> bool {
        self.sun_exposure.contains(&exposure)
    }

    pub fn has_image(&self) -> bool {
        self.image_url.as_deref().is_some_and(|url| !url.is_empty())
    }

    /// Both zone bounds, when known
    pub fn zone_range(&self) -> Option<(i32, i32)> {
        match (self.zone_min, self.zone_max) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }
}

/// Curated corrections merged over loaded records by id
///
/// Present fields replace the record's value; `notes` only replaces when
/// the override carries non-empty text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantOverride {
    pub id: String,
    #[serde(default)]
    pub is_native: Option<bool>,
    #[serde(default)]
    pub is_pollinator_friendly: Option<bool>,
    #[serde(default)]
    pub toxicity_to_pets: Option<ToxicityToPets>,
    #[serde(default)]
    pub aspca_url: Option<String>,
    #[serde(default)]
    pub beginner_friendly: Option<bool>,
    #[serde(default)]
    pub curated_for_zones: Option<Vec<i32>>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub pollinators: Option<Vec<String>>,
    #[serde(default)]
    pub suggested_use: Option<String>,
}

/// Browse-page filter selection
///
/// Dimensions combine with AND; multi-valued dimensions match when the
/// plant has any selected value. Empty or absent fields impose nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantFilters {
    #[serde(default)]
    pub zone: Option<i32>,
    #[serde(default)]
    pub native_only: bool,
    #[serde(default)]
    pub pollinator_friendly_only: bool,
    #[serde(default)]
    pub exclude_toxic_to_pets: bool,
    #[serde(default)]
    pub sun_exposure: Vec<SunExposure>,
    #[serde(default)]
    pub plant_type: Vec<PlantType>,
    #[serde(default)]
    pub water_needs: Option<WaterNeeds>,
    #[serde(default)]
    pub beginner_friendly_only: bool,
}
