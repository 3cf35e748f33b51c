//! Guftagu Web - front end for Guftagu Chat
//!
//! Serves the landing / sign-in page and owns the process-wide database
//! handle shared by every request.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;

mod api;
mod config;
mod db;
mod error;
mod logging;
mod web;

use crate::api::build_router;
use crate::config::{Config, RunMode};
use crate::db::{ChatDatabase, DatabaseClient};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The shared database handle.
    pub db: Arc<ChatDatabase>,
    /// Run mode the process started in.
    pub run_mode: RunMode,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    // This is optional and won't fail if .env doesn't exist
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: No .env file loaded ({e})");
    }

    // Initialize logging
    logging::init();

    tracing::info!("Starting Guftagu Web v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        database = %config.database.url,
        run_mode = %config.run_mode,
        "Configuration loaded"
    );

    // Resolve the shared database handle; the connection opens in the background
    let handle = db::connect(&config.database, config.run_mode).map_err(|e| {
        tracing::error!(error = %e, "Failed to set up database handle");
        anyhow::anyhow!("Database setup error: {}", e)
    })?;
    let (database, _warmup) = handle.into_parts();

    let state = AppState {
        db: Arc::clone(&database),
        run_mode: config.run_mode,
    };

    // Build router
    let app = build_router(state, &config.server.public_dir);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.close().await;
    tracing::info!("Database handle closed, shutdown complete");

    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::warn!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::warn!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
