//! Repository trait definitions for the domain layer.
//!
//! These traits are the record store contract consumed by the application
//! services. Implementations live in `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`TruckRepository`] - Truck creation, lookup and availability queries
//! - [`PackageRepository`] - Package creation and eligibility queries
//! - [`AssignmentRepository`] - Atomic commit of an assignment plan
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall`. See
//! `tests/handler_*.rs` for end-to-end usage over the in-memory store.

pub mod assignment_repository;
pub mod package_repository;
pub mod truck_repository;

pub use assignment_repository::AssignmentRepository;
pub use package_repository::PackageRepository;
pub use truck_repository::TruckRepository;

#[cfg(test)]
pub use assignment_repository::MockAssignmentRepository;
#[cfg(test)]
pub use package_repository::MockPackageRepository;
#[cfg(test)]
pub use truck_repository::MockTruckRepository;
