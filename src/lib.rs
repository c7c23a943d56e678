//! Zone Ranker Rust Implementation
//!
//! Hardiness-zone compatibility ranking and plant recommendations.
//!
//! - `zone/`: zone scoring, zone labels, ZIP lookup
//! - `ranking/`, `filters/`, `search/`: browse ordering, filtering, query search
//! - `bundles/`, `companions/`, `weekly/`: themed packs, companions, plant of the week
//! - `data/`, `inference/`: catalog loading and attribute normalization
//!
//! Everything except catalog loading and the optional HTTP server is a pure
//! function over an in-memory plant slice.

pub mod types;
pub mod error;
pub mod zone;
pub mod ranking;
pub mod filters;
pub mod search;
pub mod bundles;
pub mod companions;
pub mod weekly;
pub mod inference;
pub mod data;
pub mod config;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use types::{Plant, PlantFilters, PlantOverride, PlantType, SunExposure, ToxicityToPets, WaterNeeds};
pub use error::{CatalogError, ConfigError, ZoneError};
pub use zone::{is_close_to_zone, is_ideal_for_zone, lookup_zip, zone_score, ZoneInfo, ZoneMatch};
pub use ranking::{default_order, rank_plants, sort_by_zone_score};
pub use filters::{curated_plants_for_zone, filter_plants};
pub use search::{search_plants, SearchIntent};
pub use bundles::{build_bundle, get_all_bundles, BundleKind, PlantBundle};
pub use companions::{companion_plants, DEFAULT_COMPANION_LIMIT};
pub use weekly::{plant_of_the_week, selection_reasons, weekly_feature, WeeklyFeature};
pub use data::PlantCatalog;
pub use config::ServerConfig;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
