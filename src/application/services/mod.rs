//! Business logic services for the application layer.

pub mod assignment_service;
pub mod package_service;
pub mod truck_service;

pub use assignment_service::AssignmentService;
pub use package_service::PackageService;
pub use truck_service::TruckService;
