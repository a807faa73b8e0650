use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use swipewatch::{
    api::{create_router, AppState},
    config::Config,
    db::{create_pool, SqliteCredentialStore},
    models::Catalog,
    services::InMemorySessionStore,
};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_catalog(config: &Config) -> anyhow::Result<Catalog> {
    match &config.catalog_path {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path)),
        None => Ok(Catalog::default()),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();

    let pool = create_pool(&config.database_url, config.database_max_connections).await?;
    let catalog = load_catalog(&config)?;
    tracing::info!(shows = catalog.len(), "Catalog loaded");

    // Initialize application state
    let state = AppState::new(
        catalog,
        Arc::new(SqliteCredentialStore::new(pool)),
        Arc::new(InMemorySessionStore::new()),
    );

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(%address, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
