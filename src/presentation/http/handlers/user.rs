//! User Handlers

use axum::{
    extract::{Extension, Path, State},
    Json,
};

use crate::application::dto::UserResponse;
use crate::application::services::{UserError, UserService, UserServiceImpl};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Get user by name. Callers may only look themselves up.
pub async fn get_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(name): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    if auth.username != name {
        return Err(AppError::Unauthorized("unauthorized".into()));
    }

    let user_service = UserServiceImpl::new(state.users.clone());

    let user = user_service
        .get_user_by_name(&name)
        .await
        .map_err(|e| match e {
            UserError::NotFound => AppError::NotFound("User not found".into()),
            UserError::Internal(msg) => AppError::Internal(msg),
        })?;

    Ok(Json(user.into()))
}
