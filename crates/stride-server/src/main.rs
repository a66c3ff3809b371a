//! STRIDE Athletics Scoring HTTP Server
//!
//! Provides REST API for point/performance conversion and batch projection.

use anyhow::Result;
use std::sync::Arc;
use stride_server::config::ServerConfig;
use stride_server::{api, engine};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing()?;

    // Load configuration
    let config = ServerConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    // Initialize scoring engine
    let engine = engine::init_engine(&config)?;
    info!("Scoring engine initialized");

    // Create router
    let app = api::create_router(Arc::new(engine));

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Points API: POST http://{}/api/calculate-points", addr);
    info!(
        "  Performance API: POST http://{}/api/calculate-performance",
        addr
    );
    info!(
        "  Batch API: POST http://{}/api/calculate-performances-batch",
        addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stride_server=info,stride_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
