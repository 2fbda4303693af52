//! Custom Extractors
//!
//! Axum extractors whose rejections use the application error format.

use axum::extract::FromRequest;

use crate::shared::error::AppError;

/// JSON body extractor that rejects with `400` and an [`AppError`] body
/// instead of axum's plain-text 400/415/422 responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
