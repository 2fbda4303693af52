//! Health Check Handlers
//!
//! Provides health check endpoints for Kubernetes-style liveness and readiness probes.
//! Like every other route they sit behind the Basic auth gate.
//!
//! # Endpoints
//! - `GET /health` - Basic health check
//! - `GET /health/live` - Liveness probe (is the server running?)
//! - `GET /health/ready` - Readiness probe (is the fleet loaded?)

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::time::Instant;

use crate::domain::ScooterRepository;
use crate::startup::AppState;

/// Server start time for uptime calculation
static SERVER_START: Lazy<Instant> = Lazy::new(Instant::now);
static SERVER_START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Initialize the server start time (call during startup)
pub fn init_server_start() {
    Lazy::force(&SERVER_START);
    Lazy::force(&SERVER_START_TIME);
}

/// Basic health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Detailed health check response
#[derive(Debug, Serialize)]
pub struct DetailedHealthResponse {
    pub status: HealthStatus,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub started_at: String,
    pub checks: HealthChecks,
}

/// Individual component health checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub store: StoreHealth,
}

/// Scooter store health
#[derive(Debug, Serialize)]
pub struct StoreHealth {
    pub status: HealthStatus,
    pub scooters: usize,
    pub reserved: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Overall health status
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Simple liveness response
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub status: &'static str,
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Liveness probe - checks if the server is running
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse { status: "alive" })
}

/// Readiness probe - 200 once the fleet is loaded, 503 otherwise
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = SERVER_START.elapsed().as_secs();
    let started_at = SERVER_START_TIME.to_rfc3339();

    let store = check_store(&state).await;
    let status = store.status;

    let response = DetailedHealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: uptime,
        started_at,
        checks: HealthChecks { store },
    };

    let status_code = match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Check the scooter store is reachable and seeded
async fn check_store(state: &AppState) -> StoreHealth {
    let counts = async {
        let total = state.scooters.count().await?;
        let reserved = state.scooters.count_reserved().await?;
        Ok::<_, crate::domain::StoreError>((total, reserved))
    };

    match counts.await {
        Ok((scooters, reserved)) => StoreHealth {
            status: store_status(scooters),
            scooters,
            reserved,
            message: (scooters == 0).then(|| "Fleet is empty".to_string()),
        },
        Err(e) => StoreHealth {
            status: HealthStatus::Unhealthy,
            scooters: 0,
            reserved: 0,
            message: Some(format!("Store check failed: {}", e)),
        },
    }
}

/// An empty fleet cannot serve any request usefully
fn store_status(scooters: usize) -> HealthStatus {
    if scooters == 0 {
        HealthStatus::Unhealthy
    } else {
        HealthStatus::Healthy
    }
}
