//! Package entity.

use chrono::{DateTime, Utc};

use crate::domain::dimensions::Dimensions;

/// A package registered in the warehouse.
///
/// `assigned_truck_id` is `None` until the package is placed; once set it is
/// never cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub id: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub volume: f64,
    pub assigned_truck_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Package {
    /// Creates a new Package instance.
    pub fn new(
        id: String,
        dimensions: Dimensions,
        assigned_truck_id: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            length: dimensions.length,
            width: dimensions.width,
            height: dimensions.height,
            volume: dimensions.volume,
            assigned_truck_id,
            created_at,
        }
    }

    /// Returns true if the package already sits on a truck.
    pub fn is_assigned(&self) -> bool {
        self.assigned_truck_id.is_some()
    }
}

/// Input data for creating a new package.
#[derive(Debug, Clone)]
pub struct NewPackage {
    pub id: String,
    pub dimensions: Dimensions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_creation() {
        let dims = Dimensions::new(5.0, 1.0, 1.0).unwrap();
        let package = Package::new("p-1".to_string(), dims, None, Utc::now());

        assert_eq!(package.id, "p-1");
        assert_eq!(package.volume, 5.0);
        assert!(!package.is_assigned());
    }

    #[test]
    fn test_package_is_assigned() {
        let dims = Dimensions::new(5.0, 1.0, 1.0).unwrap();
        let package = Package::new("p-1".to_string(), dims, Some("t-1".to_string()), Utc::now());

        assert!(package.is_assigned());
        assert_eq!(package.assigned_truck_id.as_deref(), Some("t-1"));
    }
}
