//! Scooter Handlers

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{ScooterQuery, ScooterResponse, UpdateScooterRequest};
use crate::application::services::{ScooterError, ScooterService, ScooterServiceImpl};
use crate::domain::ScooterPatch;
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn map_scooter_error(e: ScooterError) -> AppError {
    match e {
        ScooterError::NotFound => AppError::NotFound("No matching scooter found".into()),
        ScooterError::Validation(errors) => validation_error(errors),
    }
}

/// List scooters, optionally only those reserved by `?user=`
pub async fn list_scooters(
    State(state): State<AppState>,
    Query(query): Query<ScooterQuery>,
) -> Result<Json<Vec<ScooterResponse>>, AppError> {
    let scooter_service = ScooterServiceImpl::new(state.scooters.clone());

    let scooters = match query.user.as_deref().filter(|u| !u.is_empty()) {
        Some(user) => {
            let reserved = scooter_service
                .list_reserved_by(user)
                .await
                .map_err(map_scooter_error)?;
            if reserved.is_empty() {
                return Err(AppError::NotFound("No matching scooter found".into()));
            }
            reserved
        }
        None => scooter_service
            .list_scooters()
            .await
            .map_err(map_scooter_error)?,
    };

    Ok(Json(scooters.into_iter().map(ScooterResponse::from).collect()))
}

/// Get scooter by ID
pub async fn get_scooter(
    State(state): State<AppState>,
    Path(scooter_id): Path<String>,
) -> Result<Json<ScooterResponse>, AppError> {
    let scooter_service = ScooterServiceImpl::new(state.scooters.clone());

    let scooter = scooter_service
        .get_scooter(&scooter_id)
        .await
        .map_err(map_scooter_error)?;

    Ok(Json(scooter.into()))
}

/// Partially update a scooter
pub async fn update_scooter(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(scooter_id): Path<String>,
    JsonBody(body): JsonBody<UpdateScooterRequest>,
) -> Result<(StatusCode, Json<ScooterResponse>), AppError> {
    if let Some(requested) = body.id.as_ref().and_then(|v| v.as_str()) {
        if requested != scooter_id {
            tracing::debug!(scooter_id = %scooter_id, requested = %requested, "Ignoring id in patch body");
        }
    }

    let scooter_service = ScooterServiceImpl::new(state.scooters.clone());

    let scooter = scooter_service
        .update_scooter(&scooter_id, ScooterPatch::from(body), &auth.username)
        .await
        .map_err(map_scooter_error)?;

    Ok((StatusCode::CREATED, Json(scooter.into())))
}
