//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::{Location, Scooter, User};

/// Scooter response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScooterResponse {
    pub id: String,
    pub reserved: bool,
    pub battery: u8,
    pub location: LocationResponse,
}

/// Location inside a scooter response
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocationResponse {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }
}

impl From<Scooter> for ScooterResponse {
    fn from(scooter: Scooter) -> Self {
        Self {
            id: scooter.id,
            reserved: scooter.reserved,
            battery: scooter.battery,
            location: scooter.location.into(),
        }
    }
}

/// User response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}
