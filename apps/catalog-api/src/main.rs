//! Catalog API - product catalog REST server

use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);
    observability::init_metrics()?;

    let db = database::postgres::connect_from_config(config.database.clone()).await?;
    info!("Successfully connected to PostgreSQL");

    let state = AppState {
        config: config.clone(),
        db,
    };

    let router = api::app(&state);

    info!(
        upload_dir = %state.config.upload_dir.display(),
        "Starting Catalog API on port {}",
        state.config.server.port
    );

    let db = state.db.clone();
    create_production_app(
        router,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing PostgreSQL pool");
            if let Err(e) = db.close().await {
                tracing::warn!("Failed to close PostgreSQL pool: {}", e);
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
