//! Truck registration and lookup service.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::domain::dimensions::Dimensions;
use crate::domain::entities::{NewTruck, Truck};
use crate::domain::repositories::TruckRepository;
use crate::error::AppError;

/// Service for registering trucks and reading their state.
pub struct TruckService {
    truck_repository: Arc<dyn TruckRepository>,
}

impl TruckService {
    /// Creates a new truck service.
    pub fn new(truck_repository: Arc<dyn TruckRepository>) -> Self {
        Self { truck_repository }
    }

    /// Registers an available truck with a fresh random id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_truck(&self, dimensions: Dimensions) -> Result<Truck, AppError> {
        let new_truck = NewTruck {
            id: Uuid::new_v4().to_string(),
            dimensions,
        };

        let truck = self.truck_repository.create(new_truck).await?;
        tracing::info!(truck_id = %truck.id, volume = truck.volume, "Truck registered");

        Ok(truck)
    }

    /// Retrieves a truck by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no truck has this id.
    pub async fn get_truck(&self, id: &str) -> Result<Truck, AppError> {
        self.truck_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("truck_not_found", "Truck not found", json!({ "id": id })))
    }

    /// Lists trucks in retrieval order.
    pub async fn list_trucks(&self, only_available: bool) -> Result<Vec<Truck>, AppError> {
        self.truck_repository.list(only_available).await
    }

    /// Number of trucks that can still receive packages.
    pub async fn count_available(&self) -> Result<i64, AppError> {
        self.truck_repository.count_available().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockTruckRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_create_truck_generates_id() {
        let mut mock_repo = MockTruckRepository::new();
        mock_repo
            .expect_create()
            .withf(|new_truck| !new_truck.id.is_empty() && new_truck.dimensions.volume == 40.0)
            .times(1)
            .returning(|new_truck| {
                Ok(Truck::new(new_truck.id, new_truck.dimensions, true, Utc::now()))
            });

        let service = TruckService::new(Arc::new(mock_repo));
        let dims = Dimensions::new(10.0, 2.0, 2.0).unwrap();

        let truck = service.create_truck(dims).await.unwrap();

        assert!(Uuid::parse_str(&truck.id).is_ok());
        assert!(truck.available);
        assert_eq!(truck.volume, 40.0);
    }

    #[tokio::test]
    async fn test_get_truck_not_found() {
        let mut mock_repo = MockTruckRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = TruckService::new(Arc::new(mock_repo));

        let result = service.get_truck("missing").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_storage_failure_is_not_a_validation_error() {
        let mut mock_repo = MockTruckRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = TruckService::new(Arc::new(mock_repo));
        let dims = Dimensions::new(1.0, 1.0, 1.0).unwrap();

        let result = service.create_truck(dims).await;
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }
}
