//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod assign;
pub mod health;
pub mod packages;
pub mod trucks;

pub use assign::assign_handler;
pub use health::health_handler;
pub use packages::{create_package_handler, get_package_handler};
pub use trucks::{create_truck_handler, get_truck_handler, truck_list_handler};
