// Axum API Server Module
//
// Purpose: JSON API over the in-memory plant catalog (browse, bundles,
// companions, plant of the week, ZIP → zone lookup)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use anyhow::Context;
use chrono::NaiveDate;

use crate::bundles::{build_bundle, get_all_bundles, BundleKind};
use crate::companions::{companion_plants, DEFAULT_COMPANION_LIMIT};
use crate::config::ServerConfig;
use crate::data::PlantCatalog;
use crate::error::ZoneError;
use crate::filters::{curated_plants_for_zone, filter_plants};
use crate::search::search_plants;
use crate::types::{PlantFilters, PlantOverride, PlantType, SunExposure, WaterNeeds};
use crate::weekly::{week_seed, weekly_feature, Season};
use crate::zone::{lookup_zip, validate_zone, ZoneMatch};

/// Upper bound for `limit` on the companions endpoint
const MAX_COMPANION_LIMIT: usize = 50;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<PlantCatalog>,
    pub cache: Cache<String, serde_json::Value>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Load the configured catalog (or the built-in seed plants)
    pub fn new(config: ServerConfig) -> anyhow::Result<Self> {
        let catalog = match &config.plant_data_path {
            Some(path) => PlantCatalog::load(path, config.overrides_path.as_deref())
                .with_context(|| format!("loading plant catalog from {:?}", path))?,
            None => {
                tracing::info!("PLANT_DATA_PATH not set, using built-in seed catalog");
                let seed = PlantCatalog::seed();
                match &config.overrides_path {
                    Some(path) => {
                        let json = std::fs::read_to_string(path)
                            .with_context(|| format!("reading overrides from {:?}", path))?;
                        let overrides = serde_json::from_str::<Vec<PlantOverride>>(&json)
                            .with_context(|| format!("parsing overrides from {:?}", path))?;
                        seed.with_overrides(&overrides)?
                    }
                    None => seed,
                }
            }
        };

        Ok(Self::from_catalog(catalog, config))
    }

    pub fn from_catalog(catalog: PlantCatalog, config: ServerConfig) -> Self {
        tracing::info!(
            "Initializing Moka cache (capacity {}, ttl {:?})...",
            config.cache_max_entries,
            config.cache_ttl
        );
        let cache = Cache::builder()
            .max_capacity(config.cache_max_entries)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            catalog: Arc::new(catalog),
            cache,
            config: Arc::new(config),
        }
    }

    /// Requested zone, or the configured default; always 1-13
    fn zone_or_default(&self, zone: Option<i32>) -> Result<i32, AppError> {
        Ok(validate_zone(zone.unwrap_or(self.config.default_zone))?)
    }

    /// Cached value for `key`, or the result of `build` (only awaited on a miss)
    async fn cached<F>(&self, key: String, build: F) -> Result<serde_json::Value, AppError>
    where
        F: Future<Output = Result<serde_json::Value, AppError>>,
    {
        if let Some(hit) = self.cache.get(&key).await {
            tracing::debug!("Cache hit for {}", key);
            return Ok(hit);
        }

        let value = build.await?;
        self.cache.insert(key, value.clone()).await;
        Ok(value)
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Catalog
        .route("/api/plants", get(list_plants))
        .route("/api/plants/:id", get(get_plant))
        .route("/api/plants/:id/companions", get(get_companions))

        // Recommendations
        .route("/api/bundles", get(list_bundles))
        .route("/api/bundles/:kind", get(get_bundle))
        .route("/api/plant-of-the-week", get(plant_of_the_week))
        .route("/api/zones/:zone/curated", get(curated_for_zone))

        // ZIP → zone
        .route("/api/zone", get(zone_for_zip))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Query parameters
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct PlantQuery {
    pub q: Option<String>,
    pub zone: Option<i32>,
    pub native_only: Option<bool>,
    pub pollinator_only: Option<bool>,
    pub pet_safe: Option<bool>,
    pub beginner_only: Option<bool>,
    /// Comma-separated: "full-sun,part-sun"
    pub sun: Option<String>,
    /// Comma-separated: "perennial,shrub"
    #[serde(rename = "type")]
    pub plant_type: Option<String>,
    pub water: Option<String>,
}

impl PlantQuery {
    fn to_filters(&self) -> Result<PlantFilters, AppError> {
        let water_needs = match self.water.as_deref() {
            Some(raw) => Some(
                WaterNeeds::parse(raw)
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown water needs '{}'", raw)))?,
            ),
            None => None,
        };

        Ok(PlantFilters {
            zone: None,
            native_only: self.native_only.unwrap_or(false),
            pollinator_friendly_only: self.pollinator_only.unwrap_or(false),
            exclude_toxic_to_pets: self.pet_safe.unwrap_or(false),
            sun_exposure: parse_list(self.sun.as_deref(), "sun exposure", SunExposure::parse)?,
            plant_type: parse_list(self.plant_type.as_deref(), "plant type", PlantType::parse)?,
            water_needs,
            beginner_friendly_only: self.beginner_only.unwrap_or(false),
        })
    }
}

fn parse_list<T>(raw: Option<&str>, what: &str, parse: fn(&str) -> Option<T>) -> Result<Vec<T>, AppError> {
    raw.map(|list| {
        list.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| parse(item).ok_or_else(|| AppError::BadRequest(format!("Unknown {} '{}'", what, item))))
            .collect()
    })
    .unwrap_or_else(|| Ok(Vec::new()))
}

#[derive(Debug, Default, Deserialize)]
pub struct ZoneQuery {
    pub zone: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct CompanionQuery {
    pub zone: Option<i32>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct ZipQuery {
    pub zip: Option<String>,
}

fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value, AppError> {
    serde_json::to_value(value).map_err(|e| AppError::Internal(format!("Serialization error: {}", e)))
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "plants": state.catalog.len(),
    }))
}

/// Search, then narrow with the browse filters
///
/// `zone` orders results; it never removes plants here.
async fn list_plants(
    State(state): State<AppState>,
    Query(params): Query<PlantQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let zone = params.zone.map(validate_zone).transpose()?;
    let filters = params.to_filters()?;
    let query = params.q.as_deref().unwrap_or("");

    let start = std::time::Instant::now();
    let found = search_plants(&state.catalog, query, zone);
    let data = filter_plants(found, &filters);
    tracing::debug!("Plant search '{}' returned {} results in {:?}", query, data.len(), start.elapsed());

    Ok(Json(serde_json::json!({
        "rows": data.len(),
        "data": to_json(&data)?,
    })))
}

/// Plant record; with `?zone=` it also carries a zone badge
async fn get_plant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ZoneQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let zone = params.zone.map(validate_zone).transpose()?;
    let plant = state
        .catalog
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Plant {} not found", id)))?;

    let mut value = to_json(plant)?;
    if let (Some(zone), Some(fields)) = (zone, value.as_object_mut()) {
        let badge = ZoneMatch::classify(plant, zone);
        fields.insert(
            "zoneMatch".to_string(),
            serde_json::json!({
                "zone": zone,
                "score": badge.score(),
                "text": badge.display_text(),
            }),
        );
    }
    Ok(Json(value))
}

async fn get_companions(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<CompanionQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let zone = state.zone_or_default(params.zone)?;
    let limit = params.limit.unwrap_or(DEFAULT_COMPANION_LIMIT).min(MAX_COMPANION_LIMIT);

    let plant = state
        .catalog
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Plant {} not found", id)))?;
    let companions = companion_plants(state.catalog.plants(), plant, zone, limit);

    Ok(Json(serde_json::json!({
        "plant": id,
        "zone": zone,
        "rows": companions.len(),
        "data": to_json(&companions)?,
    })))
}

async fn list_bundles(
    State(state): State<AppState>,
    Query(params): Query<ZoneQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let zone = state.zone_or_default(params.zone)?;

    // Bundles build on rayon; keep it off the async workers
    let catalog = Arc::clone(&state.catalog);
    let value = state
        .cached(format!("bundles:{}", zone), async move {
            let bundles = tokio::task::spawn_blocking(move || get_all_bundles(catalog.plants(), zone))
                .await
                .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;
            to_json(&bundles)
        })
        .await?;
    Ok(Json(value))
}

async fn get_bundle(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Query<ZoneQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let zone = state.zone_or_default(params.zone)?;
    let kind = BundleKind::parse(&kind)
        .ok_or_else(|| AppError::NotFound(format!("Bundle {} not found", kind)))?;

    let value = state
        .cached(format!("bundle:{}:{}", kind.id(), zone), async {
            to_json(&build_bundle(state.catalog.plants(), kind, zone))
        })
        .await?;
    Ok(Json(value))
}

async fn plant_of_the_week(
    State(state): State<AppState>,
    Query(params): Query<ZoneQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let zone = state.zone_or_default(params.zone)?;
    let today = chrono::Local::now().date_naive();
    Ok(Json(weekly_value(&state, zone, today).await?))
}

/// Keyed by week and season: a week can straddle a season change
async fn weekly_value(state: &AppState, zone: i32, today: NaiveDate) -> Result<serde_json::Value, AppError> {
    let key = format!("weekly:{}:{}:{}", zone, week_seed(today), Season::from_date(today).as_str());
    state
        .cached(key, async { to_json(&weekly_feature(state.catalog.plants(), zone, today)) })
        .await
}

async fn curated_for_zone(
    State(state): State<AppState>,
    Path(zone): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let zone = validate_zone(zone)?;
    let plants = curated_plants_for_zone(state.catalog.plants(), zone);

    Ok(Json(serde_json::json!({
        "zone": zone,
        "rows": plants.len(),
        "data": to_json(&plants)?,
    })))
}

async fn zone_for_zip(Query(params): Query<ZipQuery>) -> Result<Json<serde_json::Value>, AppError> {
    let zip = params
        .zip
        .ok_or_else(|| AppError::BadRequest("ZIP code is required".to_string()))?;
    let info = lookup_zip(&zip)?;
    Ok(Json(to_json(&info)?))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<ZoneError> for AppError {
    fn from(e: ZoneError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
