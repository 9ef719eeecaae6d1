//! Record store implementations.
//!
//! Concrete implementations of the domain repository traits.
//!
//! # Repositories
//!
//! - [`PgTruckRepository`] - Truck storage in PostgreSQL
//! - [`PgPackageRepository`] - Package storage in PostgreSQL
//! - [`PgAssignmentRepository`] - Transactional plan commits in PostgreSQL
//! - [`InMemoryStore`] - All three roles over an in-process snapshot

pub mod memory_store;
pub mod pg_assignment_repository;
pub mod pg_package_repository;
pub mod pg_truck_repository;

pub use memory_store::InMemoryStore;
pub use pg_assignment_repository::PgAssignmentRepository;
pub use pg_package_repository::PgPackageRepository;
pub use pg_truck_repository::PgTruckRepository;
