// Common test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use poem::Route;
use poem_openapi::OpenApiService;
use sea_orm::{Database, DatabaseConnection};
use stockroom_backend::api::ItemsApi;
use stockroom_backend::services::ApiKeyService;
use stockroom_backend::stores::ItemStore;

pub const TEST_API_KEY: &str = "test-api-key";

/// Creates a test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates an ItemStore backed by a fresh in-memory database
pub async fn setup_test_store() -> ItemStore {
    ItemStore::new(setup_test_db().await)
}

/// Builds the item routes against a fresh in-memory database
///
/// Endpoints are mounted at the root, so paths look like `/items/`.
pub async fn setup_test_app() -> Route {
    let db = setup_test_db().await;
    let item_store = Arc::new(ItemStore::new(db));
    let api_keys = Arc::new(ApiKeyService::new(TEST_API_KEY.to_string()));

    let api_service = OpenApiService::new(
        ItemsApi::new(item_store, api_keys),
        "Stockroom API",
        "test",
    );

    Route::new().nest("/", api_service)
}
