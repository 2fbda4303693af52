//! HTTP API
//!
//! Routes, handlers and extractors for the scooter API.

pub mod extractors;
pub mod handlers;
pub mod routes;
