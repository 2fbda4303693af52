//! Scooter field validation.
//!
//! Pure functions checking proposed values against their domain ranges.
//! Nothing here touches storage; the store calls [`ScooterValidator::check`]
//! inside its critical section and commits only the returned change.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::domain::entities::{Scooter, ScooterChange, ScooterPatch};

/// Lowest accepted battery level
pub const BATTERY_MIN: i64 = 0;

/// Highest accepted battery level
pub const BATTERY_MAX: i64 = 100;

/// Default absolute bound for latitude
pub const DEFAULT_LATITUDE_LIMIT: f64 = 180.0;

/// Default absolute bound for longitude
pub const DEFAULT_LONGITUDE_LIMIT: f64 = 180.0;

/// Check a battery level, returning it narrowed to a percentage.
pub fn validate_battery(value: i64) -> Result<u8, ValidationError> {
    if !(BATTERY_MIN..=BATTERY_MAX).contains(&value) {
        return Err(range_error(format!(
            "must be in range [{BATTERY_MIN}, {BATTERY_MAX}], got {value}"
        )));
    }
    u8::try_from(value).map_err(|_| range_error(format!("{value} does not fit a percentage")))
}

/// Check a latitude against `[-limit, limit]`.
pub fn validate_latitude(value: f64, limit: f64) -> Result<f64, ValidationError> {
    validate_coordinate(value, limit)
}

/// Check a longitude against `[-limit, limit]`.
pub fn validate_longitude(value: f64, limit: f64) -> Result<f64, ValidationError> {
    validate_coordinate(value, limit)
}

fn validate_coordinate(value: f64, limit: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() || value < -limit || value > limit {
        return Err(range_error(format!(
            "must be in range [{}, {}], got {}",
            -limit, limit, value
        )));
    }
    Ok(value)
}

fn range_error(message: String) -> ValidationError {
    ValidationError::new("range").with_message(Cow::Owned(message))
}

/// Validator for whole scooter patches, holding the configured bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScooterValidator {
    pub latitude_limit: f64,
    pub longitude_limit: f64,
}

impl Default for ScooterValidator {
    fn default() -> Self {
        Self {
            latitude_limit: DEFAULT_LATITUDE_LIMIT,
            longitude_limit: DEFAULT_LONGITUDE_LIMIT,
        }
    }
}

impl ScooterValidator {
    pub fn new(latitude_limit: f64, longitude_limit: f64) -> Self {
        Self {
            latitude_limit,
            longitude_limit,
        }
    }

    /// Validate every field present in `patch` against `current`.
    ///
    /// A location patch naming only one coordinate is checked with the other
    /// taken from the current record. All failures are collected; the patch
    /// is accepted only if none occur.
    pub fn check(
        &self,
        current: &Scooter,
        patch: &ScooterPatch,
    ) -> Result<ScooterChange, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut change = ScooterChange {
            reserved: patch.reserved,
            ..Default::default()
        };

        if let Some(battery) = patch.battery {
            match validate_battery(battery) {
                Ok(level) => change.battery = Some(level),
                Err(e) => errors.add("battery", e),
            }
        }

        if let Some(location_patch) = patch.location.filter(|l| !l.is_empty()) {
            let candidate = current.location.overlay(&location_patch);
            let latitude = validate_latitude(candidate.latitude, self.latitude_limit);
            let longitude = validate_longitude(candidate.longitude, self.longitude_limit);

            match (latitude, longitude) {
                (Ok(_), Ok(_)) => change.location = Some(candidate),
                (lat, lon) => {
                    if let Err(e) = lat {
                        errors.add("location.latitude", e);
                    }
                    if let Err(e) = lon {
                        errors.add("location.longitude", e);
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(change)
        } else {
            Err(errors)
        }
    }
}
