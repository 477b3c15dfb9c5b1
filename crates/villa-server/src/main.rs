//! Villa Admin HTTP Server
//!
//! Provides the versioned REST API for villa administration.

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use villa_server::api::rest::AppState;
use villa_server::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing()?;

    // Load configuration
    let config = ServerConfig::load()?;
    info!("Loaded configuration for {}:{}", config.host, config.port);

    // Wire repositories and build the router
    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(config);
    let app = villa_server::api::create_router(state);

    // Start server
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Villas API: http://{}/api/v1/villas", addr);
    info!("  Villa numbers API: http://{}/api/v1/villa-numbers", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "villa_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
