//! NICE-OBF API Service
//!
//! REST API service for minifying JavaScript, CSS and HTML.

use anyhow::{Context, Result};
use niceobf_api::{config::Config, create_router, AppState};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "niceobf_api=info,niceobf_transformer=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting NICE-OBF API Service");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Configuration loaded - environment {}, body limit {} bytes",
        config.environment, config.max_body_bytes
    );

    let state = AppState::new(config.environment.clone(), config.max_body_bytes);
    let app = create_router(state);

    // Start server
    let listener = TcpListener::bind(&config.api_address())
        .await
        .with_context(|| format!("Failed to bind to {}", config.api_address()))?;

    info!("NICE-OBF API listening on {}", config.api_address());
    info!("Health check: http://{}/api/health", config.api_address());
    info!("  POST /api/obfuscate - Transform JavaScript, CSS or HTML");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
