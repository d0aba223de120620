//! Catalog API - category and product CRUD server

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use migration::Migrator;
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

    info!("Connecting to PostgreSQL");
    let db = database::postgres::connect_from_config_with_retry(config.postgres.clone(), None)
        .await?;

    database::postgres::run_migrations::<Migrator>(&db).await?;
    info!("Database ready, migrations applied");

    let state = AppState {
        config: config.clone(),
        db: db.clone(),
    };

    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes)?;
    let app = router
        .merge(health_router(config.app.clone()))
        .merge(api::health::router(state.clone()));

    info!("Starting Catalog API on port {}", config.server.port);

    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        info!("Shutting down: closing database connection");
        if let Err(e) = db.close().await {
            tracing::warn!("Error closing database connection: {}", e);
        }
    })
    .await?;

    info!("Catalog API shutdown complete");
    Ok(())
}
