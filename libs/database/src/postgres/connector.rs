use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::PostgresConfig;
use crate::common::{retry_with_backoff, DatabaseError, RetryConfig};

/// Connect to a PostgreSQL database with default pool settings
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    connect_with_options(PostgresConfig::new(database_url).into_connect_options()).await
}

/// Connect with custom connection options
pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!("Successfully connected to PostgreSQL database");
    Ok(db)
}

/// Connect using a [`PostgresConfig`]
pub async fn connect_from_config(config: PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    connect_with_options(config.into_connect_options()).await
}

/// Connect using a [`PostgresConfig`], retrying with exponential backoff.
///
/// `retry` defaults to [`RetryConfig::default`] when `None`. Useful at
/// startup when the database may still be coming up.
pub async fn connect_from_config_with_retry(
    config: PostgresConfig,
    retry: Option<RetryConfig>,
) -> Result<DatabaseConnection, DatabaseError> {
    let retry = retry.unwrap_or_default();

    retry_with_backoff("postgres_connect", &retry, || {
        connect_from_config(config.clone())
    })
    .await
    .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))
}

/// Run pending migrations using the given SeaORM migrator
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
) -> Result<(), DatabaseError> {
    info!("Running database migrations");

    M::up(db, None)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;

    info!("Database migrations complete");
    Ok(())
}
