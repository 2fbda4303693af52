//! Request DTOs
//!
//! Data structures for API request bodies.
//!
//! Omitted fields deserialize to `None` and mean "leave unchanged". An
//! explicit `null` is not a value any field accepts, so it fails
//! deserialization instead of silently turning into "no change".

use serde::{Deserialize, Deserializer};

use crate::domain::{LocationPatch, ScooterPatch};

/// Deserialize a field that may be omitted but must not be `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Partial scooter update (`PATCH /scooter/{id}`)
#[derive(Debug, Default, Deserialize)]
pub struct UpdateScooterRequest {
    /// Accepted and ignored; identifiers never change
    #[serde(default)]
    pub id: Option<serde_json::Value>,

    #[serde(default, deserialize_with = "present")]
    pub reserved: Option<bool>,

    #[serde(default, deserialize_with = "present")]
    pub battery: Option<i64>,

    #[serde(default, deserialize_with = "present")]
    pub location: Option<UpdateLocationRequest>,
}

/// Partial location inside a scooter update
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct UpdateLocationRequest {
    #[serde(default, deserialize_with = "present")]
    pub latitude: Option<f64>,

    #[serde(default, deserialize_with = "present")]
    pub longitude: Option<f64>,
}

impl From<UpdateLocationRequest> for LocationPatch {
    fn from(req: UpdateLocationRequest) -> Self {
        Self {
            latitude: req.latitude,
            longitude: req.longitude,
        }
    }
}

impl From<UpdateScooterRequest> for ScooterPatch {
    fn from(req: UpdateScooterRequest) -> Self {
        Self {
            reserved: req.reserved,
            battery: req.battery,
            location: req.location.map(LocationPatch::from),
        }
    }
}

/// Query string for `GET /scooter`
#[derive(Debug, Default, Deserialize)]
pub struct ScooterQuery {
    /// Only list scooters reserved by this user
    pub user: Option<String>,
}
