//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    extract::State,
    http::header,
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};

use super::handlers;
use crate::domain::ScooterRepository;
use crate::infrastructure::metrics;
use crate::presentation::middleware::{basic_auth_middleware, track_metrics};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create the main API router
///
/// The auth gate is added with `layer`, not `route_layer`, so it also wraps
/// the fallback and method-not-allowed responses: nothing is routed before
/// credentials are checked.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(scooter_routes())
        .merge(user_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            basic_auth_middleware,
        ))
        // Outermost, so rejected requests are counted too
        .layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Scooter routes
fn scooter_routes() -> Router<AppState> {
    Router::new()
        .route("/scooter", get(handlers::scooter::list_scooters))
        .route(
            "/scooter/{scooter_id}",
            get(handlers::scooter::get_scooter).patch(handlers::scooter::update_scooter),
        )
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/user/{name}", get(handlers::user::get_user))
}

/// Prometheus metrics endpoint handler
async fn metrics_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let reserved = state
        .scooters
        .count_reserved()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    metrics::set_reserved_scooters(reserved);

    let body = metrics::gather_metrics().map_err(|e| AppError::Internal(e.to_string()))?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    ))
}
