//! Infrastructure Layer
//!
//! Contains implementations for external concerns:
//! - In-memory repositories and their startup fixtures
//! - Prometheus metrics

pub mod metrics;
pub mod repositories;
pub mod seed;
