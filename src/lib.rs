//! # Scooter Server Library
//!
//! This crate provides an HTTP API for a fleet of shared scooters:
//! - `GET /scooter` and `GET /scooter/{id}` to inspect the fleet
//! - `PATCH /scooter/{id}` to change reservation, battery and location
//! - HTTP Basic authentication in front of every route
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Scooter and User entities, repository traits, field validation
//! - **Application Layer**: Services and DTOs
//! - **Infrastructure Layer**: In-memory repositories, seed data and metrics
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! scooter_server/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects, validation
//! +-- application/    Services and DTOs
//! +-- infrastructure/ Repositories, seed data, metrics
//! +-- presentation/   HTTP routes, handlers and middleware
//! +-- shared/         Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
