//! Scooter Repository Implementation
//!
//! In-memory implementation of the ScooterRepository trait. Records live in
//! a `Vec` so listing keeps seed order; the fleet is small enough that a
//! linear lookup is cheaper than maintaining an index.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{Scooter, ScooterPatch, ScooterRepository, ScooterValidator, StoreError};

/// In-memory scooter store.
///
/// One `RwLock` guards the whole fleet. Reads share it; `apply_patch` holds
/// the write lock across lookup, validation and commit.
pub struct InMemoryScooterRepository {
    records: RwLock<Vec<Scooter>>,
    validator: ScooterValidator,
}

impl InMemoryScooterRepository {
    /// Create a store holding `seed`, in the given order.
    pub fn new(seed: Vec<Scooter>, validator: ScooterValidator) -> Self {
        Self {
            records: RwLock::new(seed),
            validator,
        }
    }
}

#[async_trait]
impl ScooterRepository for InMemoryScooterRepository {
    async fn find_all(&self) -> Result<Vec<Scooter>, StoreError> {
        Ok(self.records.read().clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Scooter>, StoreError> {
        Ok(self.records.read().iter().find(|s| s.id == id).cloned())
    }

    async fn find_reserved_by(&self, username: &str) -> Result<Vec<Scooter>, StoreError> {
        Ok(self
            .records
            .read()
            .iter()
            .filter(|s| s.is_reserved_by(username))
            .cloned()
            .collect())
    }

    async fn apply_patch(
        &self,
        id: &str,
        patch: &ScooterPatch,
        actor: &str,
    ) -> Result<Scooter, StoreError> {
        let mut records = self.records.write();
        let scooter = records
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let change = self
            .validator
            .check(scooter, patch)
            .map_err(StoreError::Rejected)?;
        scooter.apply(change, actor);

        tracing::debug!(scooter_id = %id, user = %actor, "Scooter patch committed");
        Ok(scooter.clone())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.records.read().len())
    }

    async fn count_reserved(&self) -> Result<usize, StoreError> {
        Ok(self.records.read().iter().filter(|s| s.reserved).count())
    }
}
