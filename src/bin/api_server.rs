// API Server Binary Entry Point
//
// Purpose: Start the Axum API server over the plant catalog
// Usage: cargo run --features api --bin api_server

use anyhow::Context;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zone_ranker_rust::{create_router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "zone_ranker_rust=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let config = ServerConfig::from_env().context("reading configuration from environment")?;

    tracing::info!("Configuration:");
    tracing::info!("  PLANT_DATA_PATH: {:?}", config.plant_data_path);
    tracing::info!("  PLANT_OVERRIDES_PATH: {:?}", config.overrides_path);
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  DEFAULT_ZONE: {}", config.default_zone);
    tracing::info!("  CACHE_TTL_SECS: {}", config.cache_ttl.as_secs());

    let port = config.port;

    // Load catalog, build search index and cache
    tracing::info!("Initializing application state...");
    let state = AppState::new(config)?;
    tracing::info!("Application state initialized ({} plants)", state.catalog.len());

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
