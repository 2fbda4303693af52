//! Geographic location value object.

use serde::{Deserialize, Serialize};

/// A point on the map, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// North/South
    pub latitude: f64,

    /// East/West
    pub longitude: f64,
}

impl Location {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Overlay the coordinates present in `patch` on top of this location.
    pub fn overlay(self, patch: &LocationPatch) -> Self {
        Self {
            latitude: patch.latitude.unwrap_or(self.latitude),
            longitude: patch.longitude.unwrap_or(self.longitude),
        }
    }
}

/// Partial location update. `None` leaves the coordinate untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocationPatch {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl LocationPatch {
    pub fn is_empty(&self) -> bool {
        self.latitude.is_none() && self.longitude.is_none()
    }
}
