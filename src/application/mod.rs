//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::truck_service::TruckService`] - Truck registration and lookup
//! - [`services::package_service::PackageService`] - Package registration and lookup
//! - [`services::assignment_service::AssignmentService`] - Serialized assignment runs

pub mod services;
