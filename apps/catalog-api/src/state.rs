//! Shared application state

use sea_orm::DatabaseConnection;

use crate::config::Config;

/// State shared across handlers: configuration and the database pool.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: DatabaseConnection,
}
