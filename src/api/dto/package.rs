//! DTOs for package endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Package;

/// Response for a newly registered package.
#[derive(Debug, Serialize)]
pub struct PackageCreatedResponse {
    pub status: &'static str,
    pub package_id: String,
}

/// Individual package information.
#[derive(Debug, Serialize)]
pub struct PackageItem {
    pub id: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub volume: f64,
    pub assigned_truck_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Package> for PackageItem {
    fn from(p: Package) -> Self {
        Self {
            id: p.id,
            length: p.length,
            width: p.width,
            height: p.height,
            volume: p.volume,
            assigned_truck_id: p.assigned_truck_id,
            created_at: p.created_at,
        }
    }
}
