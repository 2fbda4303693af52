//! Authentication Middleware
//!
//! HTTP Basic gate applied to every request, before routing.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Basic, Authorization, HeaderMapExt};

use crate::application::services::AuthError;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Authenticated user extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub username: String,
}

/// Authentication middleware that validates Basic credentials
pub async fn basic_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !request.headers().contains_key(axum::http::header::AUTHORIZATION) {
        return Err(AppError::Unauthorized("Missing authorization header".into()));
    }

    // Requires the "Basic " scheme and a base64 "user:pass" payload
    let Authorization(basic) = request
        .headers()
        .typed_get::<Authorization<Basic>>()
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization header format".into()))?;

    let username = state
        .verifier
        .verify(basic.username(), basic.password())
        .await
        .map_err(|e| match e {
            AuthError::Internal(msg) => AppError::Internal(msg),
            e => {
                tracing::debug!(user = %basic.username(), error = %e, "Rejected credentials");
                AppError::Unauthorized("Invalid credentials".into())
            }
        })?;

    // Insert authenticated user into request extensions
    request.extensions_mut().insert(AuthUser { username });

    // Continue to the next handler
    Ok(next.run(request).await)
}
