//! Scooter Service
//!
//! Handles fleet queries and partial updates.

use std::sync::Arc;

use async_trait::async_trait;
use validator::ValidationErrors;

use crate::domain::{Scooter, ScooterPatch, ScooterRepository, StoreError};
use crate::infrastructure::metrics;

/// Scooter service trait
#[async_trait]
pub trait ScooterService: Send + Sync {
    /// List every scooter in seed order
    async fn list_scooters(&self) -> Result<Vec<Scooter>, ScooterError>;

    /// List the scooters reserved by a user
    async fn list_reserved_by(&self, username: &str) -> Result<Vec<Scooter>, ScooterError>;

    /// Get a scooter by ID
    async fn get_scooter(&self, id: &str) -> Result<Scooter, ScooterError>;

    /// Apply a partial update on behalf of `actor`
    async fn update_scooter(
        &self,
        id: &str,
        patch: ScooterPatch,
        actor: &str,
    ) -> Result<Scooter, ScooterError>;
}

/// Scooter service errors
#[derive(Debug, thiserror::Error)]
pub enum ScooterError {
    #[error("Scooter not found")]
    NotFound,

    #[error("Invalid patch: {0}")]
    Validation(ValidationErrors),
}

impl From<StoreError> for ScooterError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ScooterError::NotFound,
            StoreError::Rejected(errors) => ScooterError::Validation(errors),
        }
    }
}

/// ScooterService implementation
pub struct ScooterServiceImpl<R>
where
    R: ScooterRepository,
{
    scooter_repo: Arc<R>,
}

impl<R> ScooterServiceImpl<R>
where
    R: ScooterRepository,
{
    pub fn new(scooter_repo: Arc<R>) -> Self {
        Self { scooter_repo }
    }
}

#[async_trait]
impl<R> ScooterService for ScooterServiceImpl<R>
where
    R: ScooterRepository + 'static,
{
    async fn list_scooters(&self) -> Result<Vec<Scooter>, ScooterError> {
        Ok(self.scooter_repo.find_all().await?)
    }

    async fn list_reserved_by(&self, username: &str) -> Result<Vec<Scooter>, ScooterError> {
        Ok(self.scooter_repo.find_reserved_by(username).await?)
    }

    async fn get_scooter(&self, id: &str) -> Result<Scooter, ScooterError> {
        self.scooter_repo
            .find_by_id(id)
            .await?
            .ok_or(ScooterError::NotFound)
    }

    async fn update_scooter(
        &self,
        id: &str,
        patch: ScooterPatch,
        actor: &str,
    ) -> Result<Scooter, ScooterError> {
        let result = self.scooter_repo.apply_patch(id, &patch, actor).await;

        match &result {
            Ok(_) => metrics::record_patch("applied"),
            Err(StoreError::NotFound(_)) => metrics::record_patch("not_found"),
            Err(StoreError::Rejected(errors)) => {
                metrics::record_patch("rejected");
                tracing::info!(scooter_id = %id, user = %actor, errors = %errors, "Scooter patch rejected");
            }
        }

        let scooter = result?;
        if patch.reserved.is_some() {
            let reserved = self.scooter_repo.count_reserved().await?;
            metrics::set_reserved_scooters(reserved);
        }
        Ok(scooter)
    }
}
