// Main entry point for the scraper API server

use std::sync::Arc;

use anyhow::{Context, Result};
use extraction::Fetcher;
use server_core::{server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Amazon Scraper API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Build shared HTTP clients
    let fetcher = Arc::new(Fetcher::new().context("Failed to create HTTP clients")?);

    // Build application
    let app = build_app(fetcher);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
