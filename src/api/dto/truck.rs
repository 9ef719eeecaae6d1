//! DTOs for truck endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::Truck;

/// Response for a newly registered truck.
#[derive(Debug, Serialize)]
pub struct TruckCreatedResponse {
    pub status: &'static str,
    pub truck_id: String,
}

/// Individual truck information.
#[derive(Debug, Serialize)]
pub struct TruckItem {
    pub id: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub volume: f64,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Truck> for TruckItem {
    fn from(t: Truck) -> Self {
        Self {
            id: t.id,
            length: t.length,
            width: t.width,
            height: t.height,
            volume: t.volume,
            available: t.available,
            created_at: t.created_at,
        }
    }
}

/// Response containing list of trucks.
#[derive(Debug, Serialize)]
pub struct TruckListResponse {
    pub items: Vec<TruckItem>,
}

/// Query parameters for listing trucks.
///
/// Uses `serde_with` to parse the flag from the query string.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct TruckListParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub available: Option<bool>,
}
