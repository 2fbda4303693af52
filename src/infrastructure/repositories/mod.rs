//! Repository Implementations
//!
//! In-memory implementations of the domain repository traits.
//!
//! - **InMemoryScooterRepository** - the fleet, behind a single lock
//! - **InMemoryUserRepository** - read-only user directory

pub mod scooter_repository;
pub mod user_repository;

pub use scooter_repository::InMemoryScooterRepository;
pub use user_repository::InMemoryUserRepository;
