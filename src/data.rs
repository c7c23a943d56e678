//! Catalog Loading and Management
//!
//! Builds the in-memory plant collection every ranking function reads:
//! JSON records → curated overrides → attribute inference → search index.
//! The result is immutable; reloading means building a new catalog.

use crate::error::CatalogError;
use crate::inference::apply_inference;
use crate::search::fuzzy_index::FuzzyIndex;
use crate::types::{Plant, PlantOverride, PlantType, SunExposure, ToxicityToPets, WaterNeeds};
use ahash::AHashMap;
use rustc_hash::FxHashMap;
use smallvec::smallvec;
use std::path::Path;

/// Immutable plant collection with id lookup and a prebuilt search index
pub struct PlantCatalog {
    plants: Vec<Plant>,
    by_id: FxHashMap<String, usize>,
    search_index: FuzzyIndex,
}

impl PlantCatalog {
    /// Index already-normalized records (no inference, no overrides)
    pub fn new(plants: Vec<Plant>) -> Result<Self, CatalogError> {
        let mut by_id = FxHashMap::default();
        for (idx, plant) in plants.iter().enumerate() {
            if by_id.insert(plant.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateId(plant.id.clone()));
            }
        }
        Ok(Self::with_index(plants, by_id))
    }

    /// Built-in sample catalog
    pub fn seed() -> Self {
        let plants = seed_plants();
        let by_id = plants
            .iter()
            .enumerate()
            .map(|(idx, plant)| (plant.id.clone(), idx))
            .collect();
        Self::with_index(plants, by_id)
    }

    fn with_index(plants: Vec<Plant>, by_id: FxHashMap<String, usize>) -> Self {
        let search_index = FuzzyIndex::build(&plants);
        Self {
            plants,
            by_id,
            search_index,
        }
    }

    /// Parse a JSON array of raw records, merge overrides, run inference
    pub fn from_json_str(json: &str, overrides: &[PlantOverride]) -> Result<Self, CatalogError> {
        let raw: Vec<Plant> = serde_json::from_str(json)?;
        Self::from_raw(raw, overrides)
    }

    /// Load records (and optionally overrides) from JSON files
    pub fn load(plants_path: &Path, overrides_path: Option<&Path>) -> Result<Self, CatalogError> {
        tracing::info!("Loading plant records from {:?}", plants_path);
        let json = read_file(plants_path)?;

        let overrides: Vec<PlantOverride> = match overrides_path {
            Some(path) => {
                tracing::info!("Loading plant overrides from {:?}", path);
                serde_json::from_str(&read_file(path)?)?
            }
            None => Vec::new(),
        };

        let catalog = Self::from_json_str(&json, &overrides)?;
        tracing::info!(
            "Catalog ready: {} plants, {} overrides, {} search terms",
            catalog.len(),
            overrides.len(),
            catalog.search_index.term_count()
        );
        Ok(catalog)
    }

    /// Merge another set of overrides into this catalog's records
    pub fn with_overrides(self, overrides: &[PlantOverride]) -> Result<Self, CatalogError> {
        Self::from_raw(self.plants, overrides)
    }

    fn from_raw(raw: Vec<Plant>, overrides: &[PlantOverride]) -> Result<Self, CatalogError> {
        let plants = apply_overrides(raw, overrides)
            .into_iter()
            .map(apply_inference)
            .collect();
        Self::new(plants)
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn get(&self, id: &str) -> Option<&Plant> {
        self.by_id.get(id).map(|&idx| &self.plants[idx])
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn search_index(&self) -> &FuzzyIndex {
        &self.search_index
    }
}

fn read_file(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge curated overrides into records by id
pub fn apply_overrides(plants: Vec<Plant>, overrides: &[PlantOverride]) -> Vec<Plant> {
    let mut pending: AHashMap<&str, &PlantOverride> =
        overrides.iter().map(|o| (o.id.as_str(), o)).collect();

    let merged: Vec<Plant> = plants
        .into_iter()
        .map(|plant| match pending.remove(plant.id.as_str()) {
            Some(over) => merge_override(plant, over),
            None => plant,
        })
        .collect();

    for id in pending.keys() {
        tracing::warn!("Override for unknown plant id '{}' ignored", id);
    }

    merged
}

fn merge_override(mut plant: Plant, over: &PlantOverride) -> Plant {
    if over.is_native.is_some() {
        plant.is_native = over.is_native;
    }
    if over.is_pollinator_friendly.is_some() {
        plant.is_pollinator_friendly = over.is_pollinator_friendly;
    }
    if let Some(toxicity) = over.toxicity_to_pets {
        plant.toxicity_to_pets = toxicity;
    }
    if over.aspca_url.is_some() {
        plant.aspca_url = over.aspca_url.clone();
    }
    if over.beginner_friendly.is_some() {
        plant.beginner_friendly = over.beginner_friendly;
    }
    if let Some(zones) = &over.curated_for_zones {
        plant.curated_for_zones = zones.clone();
    }
    // Notes only replace when the override actually says something
    if let Some(notes) = over.notes.as_deref().filter(|n| !n.is_empty()) {
        plant.notes = Some(notes.to_string());
    }
    if let Some(pollinators) = &over.pollinators {
        plant.pollinators = pollinators.clone();
    }
    if over.suggested_use.is_some() {
        plant.suggested_use = over.suggested_use.clone();
    }
    plant
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Six well-documented starter plants used when no catalog file is configured
pub fn seed_plants() -> Vec<Plant> {
    vec![
        Plant {
            image_url: Some("https://images.unsplash.com/photo-1597165171577-346229e51a45".to_string()),
            zone_min: Some(3),
            zone_max: Some(9),
            is_native: Some(true),
            is_pollinator_friendly: Some(true),
            sun_exposure: smallvec![SunExposure::FullSun, SunExposure::PartSun],
            water_needs: Some(WaterNeeds::Low),
            plant_type: Some(PlantType::Perennial),
            bloom_period: Some("Summer to early fall".to_string()),
            spacing_inches: Some(18.0),
            planting_depth_inches: Some(0.25),
            toxicity_to_pets: ToxicityToPets::NonToxic,
            beginner_friendly: Some(true),
            curated_for_zones: vec![3, 4, 5, 6, 7],
            description: Some("A native wildflower with purple petals around a spiky orange cone. Draws butterflies, bees and goldfinches.".to_string()),
            pollinators: strings(&["Butterflies", "Bees", "Goldfinches"]),
            suggested_use: Some("Prairie gardens, borders, pollinator gardens".to_string()),
            notes: Some("Drought tolerant once established. Leave seed heads for winter birds.".to_string()),
            ..Plant::new("echinacea-purpurea", "Purple Coneflower", "Echinacea purpurea")
        },
        Plant {
            image_url: Some("https://images.unsplash.com/photo-1563207153-f403bf289096".to_string()),
            zone_min: Some(3),
            zone_max: Some(9),
            is_native: Some(true),
            is_pollinator_friendly: Some(true),
            sun_exposure: smallvec![SunExposure::FullSun],
            water_needs: Some(WaterNeeds::Low),
            plant_type: Some(PlantType::Perennial),
            bloom_period: Some("Mid to late summer".to_string()),
            spacing_inches: Some(12.0),
            planting_depth_inches: Some(0.125),
            toxicity_to_pets: ToxicityToPets::Toxic,
            aspca_url: Some("https://www.aspca.org/pet-care/animal-poison-control".to_string()),
            beginner_friendly: Some(true),
            curated_for_zones: vec![3, 4, 5, 6],
            description: Some("Bright orange milkweed and a host plant for monarch caterpillars.".to_string()),
            pollinators: strings(&["Monarch Butterflies", "Bees", "Other Butterflies"]),
            suggested_use: Some("Pollinator gardens, meadows, dry slopes".to_string()),
            notes: Some("Toxic if ingested. Slow to emerge in spring.".to_string()),
            ..Plant::new("asclepias-tuberosa", "Butterfly Weed", "Asclepias tuberosa")
        },
        Plant {
            image_url: Some("https://images.unsplash.com/photo-1595429973945-f0d3c80fc571".to_string()),
            zone_min: Some(3),
            zone_max: Some(7),
            is_native: Some(true),
            is_pollinator_friendly: Some(true),
            sun_exposure: smallvec![SunExposure::FullSun, SunExposure::PartSun],
            water_needs: Some(WaterNeeds::Medium),
            plant_type: Some(PlantType::Perennial),
            bloom_period: Some("Summer to fall".to_string()),
            spacing_inches: Some(12.0),
            planting_depth_inches: Some(0.125),
            toxicity_to_pets: ToxicityToPets::NonToxic,
            beginner_friendly: Some(true),
            curated_for_zones: vec![3, 4, 5, 6, 7],
            description: Some("Yellow petals with dark centers. Self-seeds readily and feeds many pollinators.".to_string()),
            pollinators: strings(&["Bees", "Butterflies", "Birds (seeds)"]),
            suggested_use: Some("Borders, meadows, naturalized areas".to_string()),
            notes: Some("Tolerates poor soil and drought. Excellent cut flower.".to_string()),
            ..Plant::new("rudbeckia-hirta", "Black-Eyed Susan", "Rudbeckia hirta")
        },
        Plant {
            image_url: Some("https://images.unsplash.com/photo-1611251184453-dcd6e1bb36a4".to_string()),
            zone_min: Some(5),
            zone_max: Some(9),
            is_native: Some(false),
            is_pollinator_friendly: Some(true),
            sun_exposure: smallvec![SunExposure::FullSun],
            water_needs: Some(WaterNeeds::Low),
            plant_type: Some(PlantType::Perennial),
            bloom_period: Some("Late spring to summer".to_string()),
            spacing_inches: Some(24.0),
            planting_depth_inches: Some(0.25),
            toxicity_to_pets: ToxicityToPets::Toxic,
            aspca_url: Some("https://www.aspca.org/pet-care/animal-poison-control/toxic-and-non-toxic-plants/lavender".to_string()),
            beginner_friendly: Some(true),
            curated_for_zones: vec![5, 6, 7, 8],
            description: Some("Fragrant purple spikes loved by bees. Aromatic, drought tolerant foliage.".to_string()),
            pollinators: strings(&["Bees", "Butterflies"]),
            suggested_use: Some("Herb gardens, borders, containers".to_string()),
            notes: Some("Needs well-drained soil. Prune after flowering.".to_string()),
            ..Plant::new("lavandula-angustifolia", "English Lavender", "Lavandula angustifolia")
        },
        Plant {
            image_url: Some("https://images.unsplash.com/photo-1524587920944-78e345e34e2a".to_string()),
            zone_min: Some(3),
            zone_max: Some(8),
            is_native: Some(true),
            is_pollinator_friendly: Some(true),
            sun_exposure: smallvec![SunExposure::PartSun, SunExposure::Shade],
            water_needs: Some(WaterNeeds::Medium),
            plant_type: Some(PlantType::Perennial),
            bloom_period: Some("Late spring to early summer".to_string()),
            spacing_inches: Some(12.0),
            planting_depth_inches: Some(0.125),
            toxicity_to_pets: ToxicityToPets::Toxic,
            aspca_url: Some("https://www.aspca.org/pet-care/animal-poison-control".to_string()),
            beginner_friendly: Some(true),
            curated_for_zones: vec![3, 4, 5],
            description: Some("Nodding red and yellow flowers shaped for hummingbirds. Native woodland wildflower.".to_string()),
            pollinators: strings(&["Hummingbirds", "Bees", "Butterflies"]),
            suggested_use: Some("Woodland gardens, shade gardens, rock gardens".to_string()),
            notes: Some("Self-seeds readily. All parts toxic if ingested.".to_string()),
            ..Plant::new("aquilegia-canadensis", "Wild Columbine", "Aquilegia canadensis")
        },
        Plant {
            image_url: Some("https://images.unsplash.com/photo-1533628635777-037afca3b375".to_string()),
            zone_min: Some(4),
            zone_max: Some(8),
            is_native: Some(false),
            is_pollinator_friendly: Some(true),
            sun_exposure: smallvec![SunExposure::FullSun, SunExposure::PartSun],
            water_needs: Some(WaterNeeds::Medium),
            plant_type: Some(PlantType::Perennial),
            bloom_period: Some("Late spring to fall".to_string()),
            spacing_inches: Some(18.0),
            planting_depth_inches: Some(0.25),
            toxicity_to_pets: ToxicityToPets::NonToxic,
            beginner_friendly: Some(true),
            curated_for_zones: vec![4, 5, 6, 7],
            description: Some("Purple-blue flower spikes that bloom for months.".to_string()),
            pollinators: strings(&["Bees", "Butterflies", "Hummingbirds"]),
            suggested_use: Some("Borders, cottage gardens, pollinator gardens".to_string()),
            notes: Some("Deadhead for continuous bloom. Drought tolerant once established.".to_string()),
            ..Plant::new("salvia-nemorosa", "Woodland Sage", "Salvia nemorosa")
        },
    ]
}
