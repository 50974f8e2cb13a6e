//! shelf-gateway server entry point.
//!
//! Starts the Axum HTTP server with REST and WebSocket endpoints.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use shelf_gateway::app_state::AppState;
use shelf_gateway::config::LibraryConfig;
use shelf_gateway::{build_app, build_library};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = LibraryConfig::from_env()?;
    tracing::info!(
        addr = %config.listen_addr,
        inbox_capacity = config.inbox_capacity,
        pool_retrieval = ?config.options.pool_retrieval,
        shelf_delete_policy = ?config.options.shelf_delete_policy,
        "starting shelf-gateway"
    );

    // Build domain + service layer
    let library = build_library(
        config.event_bus_capacity,
        config.inbox_capacity,
        config.options,
    );

    // Build application state and router
    let app = build_app(AppState::new(library));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
