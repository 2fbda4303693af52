//! # Scooter Server
//!
//! HTTP API for a fleet of shared scooters.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - In-memory fleet and user directory
//! - HTTP server

use anyhow::Result;
use tracing::info;

use scooter_server::config::Settings;
use scooter_server::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    scooter_server::telemetry::init_tracing();

    info!("Starting Scooter Server...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    info!("Server stopped");
    Ok(())
}
