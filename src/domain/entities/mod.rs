//! # Domain Entities
//!
//! Core domain entities of the scooter fleet.
//!
//! - **Scooter**: a rentable vehicle with reservation state, battery and location
//! - **User**: a known rider, used for reservation ownership and credential checks
//!
//! Each entity has an associated repository trait defining data access
//! operations. These traits are implemented in the infrastructure layer.

mod scooter;
mod user;

pub use scooter::{Scooter, ScooterChange, ScooterPatch, ScooterRepository, StoreError};
pub use user::{User, UserRepository};

#[cfg(test)]
pub use user::MockUserRepository;
