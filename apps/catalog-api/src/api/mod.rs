//! API routes module

pub mod health;

use axum::Router;
use domain_catalog::{handlers, CatalogService, PgCategoryRepository, PgProductRepository};

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    let service = CatalogService::new(
        PgCategoryRepository::new(state.db.clone()),
        PgProductRepository::new(state.db.clone()),
    );

    Router::new()
        .nest("/category", handlers::category::router(service.clone()))
        .nest("/product", handlers::product::router(service))
}
