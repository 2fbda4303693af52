//! Startup fixtures.
//!
//! The fleet and the user directory are created from these lists when the
//! process starts; nothing survives a restart.

use crate::domain::{Location, Scooter, User};

/// The initial fleet, in listing order.
pub fn scooters() -> Vec<Scooter> {
    vec![
        Scooter::new("abc123", 99, Location::new(49.26227, -123.14242)),
        Scooter::new("def456", 88, Location::new(49.26636, -123.14226)),
        Scooter::new("ghi789", 77, Location::new(49.26532, -123.13659)).with_reservation("premium"),
        Scooter::new("jkl012", 9, Location::new(49.26443, -123.13469)),
    ]
}

/// The initial user directory.
pub fn users() -> Vec<User> {
    vec![
        User::new("a1", "pay2go"),
        User::new("b2", "basic"),
        User::new("c3", "premium"),
    ]
}
