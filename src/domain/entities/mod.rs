//! Core domain entities representing the warehouse data model.
//!
//! Entities are plain data structures. Creation inputs are separate structs
//! carrying already-validated dimensions.
//!
//! # Entity Types
//!
//! - [`Truck`] - A truck that can receive packages
//! - [`Package`] - A package waiting for (or holding) a truck assignment
//!
//! # Design Pattern
//!
//! - `NewTruck`, `NewPackage` - For creating new records

pub mod package;
pub mod truck;

pub use package::{NewPackage, Package};
pub use truck::{NewTruck, Truck};
