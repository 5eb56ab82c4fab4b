//! Apptrack Server - main entry point.
//!
//! Boots the in-memory stores and serves the HTTP API. All state is
//! process-scoped: a restart discards every job.

use apptrack_core::{
    api::{self, AppState},
    config::Config,
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config: {}. Using defaults.", e);
        Config::default()
    });

    // Initialize logging
    telemetry::init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Apptrack Server"
    );

    // Create app state (empty in-memory stores)
    let state = AppState::new();

    // Build router
    let app = api::build_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Listening");

    tokio::select! {
        result = axum::serve(listener, app) => {
            if let Err(e) = result {
                tracing::error!(error = %e, "Server ended unexpectedly");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received ctrl+c, shutting down");
        }
    }

    Ok(())
}
