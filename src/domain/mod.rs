//! Domain layer: entities, dimension validation and the assignment engine.
//!
//! Nothing in here touches the database or HTTP. Repository traits define the
//! contracts implemented by [`crate::infrastructure`].
//!
//! - [`dimensions`] - Validates raw dimensions and derives the volume
//! - [`entities`] - Truck and package records
//! - [`assignment`] - Pure placement strategies
//! - [`repositories`] - Record store trait definitions

pub mod assignment;
pub mod dimensions;
pub mod entities;
pub mod repositories;
