//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **Location**: latitude/longitude pair, plus its partial-update form

mod location;

pub use location::*;
