use std::sync::Arc;

use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;

use stockroom_backend::api::{HealthApi, ItemsApi};
use stockroom_backend::config::{self, Settings};
use stockroom_backend::services::ApiKeyService;
use stockroom_backend::stores::ItemStore;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    config::init_logging().expect("Failed to initialize logging");

    let settings = Settings::from_env();

    // Connect to the database and run migrations
    let db = config::init_database(&settings)
        .await
        .expect("Failed to initialize database");

    let item_store = Arc::new(ItemStore::new(db));
    let api_keys = Arc::new(ApiKeyService::new(settings.api_key().to_string()));
    let items_api = ItemsApi::new(item_store, api_keys);

    let api_service = OpenApiService::new(
        (HealthApi, items_api),
        "Stockroom API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("http://{}/api", settings.server_address()));

    let ui = api_service.swagger_ui();

    // Compose routes: nest API service under /api and Swagger UI under /swagger
    let app = Route::new().nest("/api", api_service).nest("/swagger", ui);

    tracing::info!("Starting server on http://{}", settings.server_address());
    tracing::info!(
        "Swagger UI available at http://{}/swagger",
        settings.server_address()
    );

    let result = Server::new(TcpListener::bind(settings.server_address()))
        .run(app)
        .await;

    tracing::info!("Server stopped");
    result
}
