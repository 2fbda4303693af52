//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **ScooterService**: fleet listing, lookup and validated partial updates
//! - **UserService**: user directory lookups
//! - **CredentialVerifier**: pluggable Basic credential policies

pub mod auth_service;
pub mod scooter_service;
pub mod user_service;

// Re-export auth service types
pub use auth_service::{
    build_verifier, AllowListCredentials, AnyCredentials, AuthError, CredentialVerifier,
    DirectoryCredentials,
};

// Re-export scooter service types
pub use scooter_service::{ScooterError, ScooterService, ScooterServiceImpl};

// Re-export user service types
pub use user_service::{UserError, UserService, UserServiceImpl};
