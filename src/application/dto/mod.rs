//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{ScooterQuery, UpdateLocationRequest, UpdateScooterRequest};
pub use response::{LocationResponse, ScooterResponse, UserResponse};
