//! # Domain Layer
//!
//! The domain layer contains the core rules of the scooter fleet.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Scooter and User, plus their repository traits
//! - **value_objects**: Location and its partial-update form
//! - **services**: field validation for scooter patches

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use services::*;
pub use value_objects::*;
