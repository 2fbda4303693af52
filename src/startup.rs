//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

use crate::application::services::{build_verifier, CredentialVerifier};
use crate::config::Settings;
use crate::domain::ScooterRepository;
use crate::infrastructure::repositories::{InMemoryScooterRepository, InMemoryUserRepository};
use crate::infrastructure::{metrics, seed};
use crate::presentation::http::handlers::health;
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub scooters: Arc<InMemoryScooterRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Seed the stores and pick the credential policy from settings
    pub fn new(settings: Settings) -> Self {
        let scooters = Arc::new(InMemoryScooterRepository::new(
            seed::scooters(),
            settings.scooter_validator(),
        ));
        let users = Arc::new(InMemoryUserRepository::new(seed::users()));
        let verifier = build_verifier(&settings.auth, users.clone());

        Self {
            scooters,
            users,
            verifier,
            settings: Arc::new(settings),
        }
    }

    /// Replace the credential policy
    pub fn with_verifier(mut self, verifier: Arc<dyn CredentialVerifier>) -> Self {
        self.verifier = verifier;
        self
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        let state = AppState::new(settings.clone());
        let scooters = state.scooters.count().await?;
        let reserved = state.scooters.count_reserved().await?;
        metrics::set_reserved_scooters(reserved);
        tracing::info!(
            scooters,
            reserved,
            users = state.users.len(),
            auth_mode = ?settings.auth.mode,
            latitude_limit = settings.validation.latitude_limit,
            longitude_limit = settings.validation.longitude_limit,
            "Fleet seeded"
        );

        // Build router with middleware
        let router = routes::create_router(state)
            .layer(logging::create_trace_layer())
            .layer(cors::create_cors_layer(&settings.cors));

        // Bind to address
        let addr: SocketAddr = settings.server.socket_addr()?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
