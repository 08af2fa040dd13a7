//! Biblioteca Server - Book Catalog
//!
//! REST API server for the library's book catalog.

use std::net::SocketAddr;

use biblioteca_server::{
    api, config::AppConfig, db, logging, repository::Repository, services::Services, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    logging::init(&config.logging);

    tracing::info!("Starting Biblioteca Server v{}", env!("CARGO_PKG_VERSION"));

    // Open the database and make sure the schema exists
    let pool = db::open(&config.database).await?;

    tracing::info!("Connected to database {}", config.database.url);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    // Create repository, services and application state
    let services = Services::new(Repository::new(pool));
    let state = AppState::new(services);

    // Build router
    let app = api::create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
