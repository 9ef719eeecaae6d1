//! Truck entity.

use chrono::{DateTime, Utc};

use crate::domain::dimensions::Dimensions;

/// A truck with fixed cargo dimensions.
///
/// `available` flips to `false` once the truck is the target of a committed
/// assignment and never flips back.
#[derive(Debug, Clone, PartialEq)]
pub struct Truck {
    pub id: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub volume: f64,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

impl Truck {
    /// Creates a new Truck instance.
    pub fn new(id: String, dimensions: Dimensions, available: bool, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            length: dimensions.length,
            width: dimensions.width,
            height: dimensions.height,
            volume: dimensions.volume,
            available,
            created_at,
        }
    }
}

/// Input data for creating a new truck.
#[derive(Debug, Clone)]
pub struct NewTruck {
    pub id: String,
    pub dimensions: Dimensions,
}
