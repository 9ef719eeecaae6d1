//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Dimension payloads are read as raw JSON and checked
//! by [`crate::domain::dimensions::Dimensions::parse`].

pub mod assignment;
pub mod health;
pub mod package;
pub mod truck;
