use anyhow::Context;
use tracing_subscriber::EnvFilter;

use cert_advisor::api::{create_router, AppState, Settings};
use cert_advisor::config::Config;
use cert_advisor::services::{load_catalog_file, RecommendationEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cert_advisor=info,tower_http=info")),
        )
        .init();

    // Catalog, vocabulary and feature matrix are frozen before serving
    let catalog = load_catalog_file(&config.catalog_path)
        .with_context(|| format!("Failed to load catalog from {}", config.catalog_path))?;
    let engine = RecommendationEngine::build(catalog);

    let state = AppState::with_defaults(engine, Settings::from(&config));
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!(%address, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
