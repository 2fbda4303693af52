//! # Domain Services
//!
//! Domain services encapsulate rules that don't naturally belong to a single
//! entity.
//!
//! ## Services
//!
//! - **ScooterValidator**: range checks for battery level and coordinates

mod scooter_validator;

pub use scooter_validator::*;
