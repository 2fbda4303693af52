//! Scooter entity and repository trait.
//!
//! A scooter is the only mutable resource in the fleet. Its identifier is
//! fixed at seed time; reservation state, battery level and location change
//! through validated patches.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use crate::domain::value_objects::{Location, LocationPatch};

/// Represents a rentable scooter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scooter {
    /// Unique, immutable identifier
    pub id: String,

    /// Whether somebody currently holds a reservation
    pub reserved: bool,

    /// Battery level in percent (0-100)
    pub battery: u8,

    /// Last known position
    pub location: Location,

    /// Username holding the current reservation
    #[serde(skip)]
    pub reserved_by: Option<String>,
}

impl Scooter {
    /// Create an unreserved scooter.
    pub fn new(id: impl Into<String>, battery: u8, location: Location) -> Self {
        Self {
            id: id.into(),
            reserved: false,
            battery,
            location,
            reserved_by: None,
        }
    }

    /// Mark the scooter as reserved by `username`.
    pub fn with_reservation(mut self, username: impl Into<String>) -> Self {
        self.reserved = true;
        self.reserved_by = Some(username.into());
        self
    }

    /// Check if `username` holds the current reservation.
    pub fn is_reserved_by(&self, username: &str) -> bool {
        self.reserved && self.reserved_by.as_deref() == Some(username)
    }

    /// Commit a validated change.
    ///
    /// Reserving an already reserved scooter keeps the original holder, so
    /// replaying the same patch never changes the record.
    pub fn apply(&mut self, change: ScooterChange, actor: &str) {
        match change.reserved {
            Some(true) if !self.reserved => {
                self.reserved = true;
                self.reserved_by = Some(actor.to_string());
            }
            Some(false) => {
                self.reserved = false;
                self.reserved_by = None;
            }
            _ => {}
        }
        if let Some(battery) = change.battery {
            self.battery = battery;
        }
        if let Some(location) = change.location {
            self.location = location;
        }
    }
}

/// Requested partial update, exactly as the client sent it.
///
/// Values are unchecked; they become a [`ScooterChange`] only after passing
/// the scooter validator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScooterPatch {
    pub reserved: Option<bool>,
    pub battery: Option<i64>,
    pub location: Option<LocationPatch>,
}

impl ScooterPatch {
    /// Check if the patch touches no field at all.
    pub fn is_empty(&self) -> bool {
        self.reserved.is_none()
            && self.battery.is_none()
            && self.location.map_or(true, |l| l.is_empty())
    }
}

/// A patch whose values are known to be in range.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScooterChange {
    pub reserved: Option<bool>,
    pub battery: Option<u8>,
    /// Fully resolved location (missing coordinates already filled in)
    pub location: Option<Location>,
}

/// Errors raised by scooter storage.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Scooter {0} not found")]
    NotFound(String),

    #[error("Patch rejected: {0}")]
    Rejected(ValidationErrors),
}

/// Repository trait for Scooter data access operations.
///
/// `apply_patch` must look up, validate and commit under one critical
/// section so concurrent patches on the same record never interleave.
#[async_trait]
pub trait ScooterRepository: Send + Sync {
    /// All scooters in seed order.
    async fn find_all(&self) -> Result<Vec<Scooter>, StoreError>;

    /// Find a scooter by its identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<Scooter>, StoreError>;

    /// Scooters whose reservation is held by `username`, in seed order.
    async fn find_reserved_by(&self, username: &str) -> Result<Vec<Scooter>, StoreError>;

    /// Validate and apply a patch atomically, returning the updated record.
    async fn apply_patch(
        &self,
        id: &str,
        patch: &ScooterPatch,
        actor: &str,
    ) -> Result<Scooter, StoreError>;

    /// Number of scooters in the fleet.
    async fn count(&self) -> Result<usize, StoreError>;

    /// Number of currently reserved scooters.
    async fn count_reserved(&self) -> Result<usize, StoreError>;
}
