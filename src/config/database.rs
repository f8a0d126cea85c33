use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::config::Settings;
use crate::errors::internal::ItemStoreError;

/// Connect to the database and bring the schema up to date
///
/// # Returns
/// * `Ok(DatabaseConnection)` - Connection established and migrations applied
/// * `Err(ItemStoreError)` - Connection or migration failed
pub async fn init_database(settings: &Settings) -> Result<DatabaseConnection, ItemStoreError> {
    let db = Database::connect(settings.database_url())
        .await
        .map_err(|e| ItemStoreError::database("connect_database", e))?;

    tracing::debug!("Connected to database: {}", settings.database_url());

    Migrator::up(&db, None)
        .await
        .map_err(|e| ItemStoreError::database("run_migrations", e))?;

    tracing::debug!("Database migrations completed");

    Ok(db)
}
