//! In-process record store.
//!
//! Implements every repository trait over one [`RwLock`]-guarded snapshot.
//! Insertion order is retrieval order. Used by `STORE_BACKEND=memory` and by
//! the handler tests.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashSet;
use tokio::sync::RwLock;

use crate::domain::assignment::Placement;
use crate::domain::entities::{NewPackage, NewTruck, Package, Truck};
use crate::domain::repositories::{AssignmentRepository, PackageRepository, TruckRepository};
use crate::error::AppError;

#[derive(Default)]
struct StoreState {
    trucks: Vec<Truck>,
    packages: Vec<Package>,
}

/// Volatile store for trucks and packages.
///
/// Share one instance (behind an `Arc`) across the three repository roles so
/// commits see the same data the reads returned.
#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TruckRepository for InMemoryStore {
    async fn create(&self, new_truck: NewTruck) -> Result<Truck, AppError> {
        let mut state = self.state.write().await;

        if state.trucks.iter().any(|t| t.id == new_truck.id) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "trucks_pkey" }),
            ));
        }

        let truck = Truck::new(new_truck.id, new_truck.dimensions, true, Utc::now());
        state.trucks.push(truck.clone());
        Ok(truck)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Truck>, AppError> {
        let state = self.state.read().await;
        Ok(state.trucks.iter().find(|t| t.id == id).cloned())
    }

    async fn list_available(&self) -> Result<Vec<Truck>, AppError> {
        TruckRepository::list(self, true).await
    }

    async fn list(&self, only_available: bool) -> Result<Vec<Truck>, AppError> {
        let state = self.state.read().await;
        Ok(state
            .trucks
            .iter()
            .filter(|t| !only_available || t.available)
            .cloned()
            .collect())
    }

    async fn count_available(&self) -> Result<i64, AppError> {
        let state = self.state.read().await;
        Ok(state.trucks.iter().filter(|t| t.available).count() as i64)
    }
}

#[async_trait]
impl PackageRepository for InMemoryStore {
    async fn create(&self, new_package: NewPackage) -> Result<Package, AppError> {
        let mut state = self.state.write().await;

        if state.packages.iter().any(|p| p.id == new_package.id) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "packages_pkey" }),
            ));
        }

        let package = Package::new(new_package.id, new_package.dimensions, None, Utc::now());
        state.packages.push(package.clone());
        Ok(package)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Package>, AppError> {
        let state = self.state.read().await;
        Ok(state.packages.iter().find(|p| p.id == id).cloned())
    }

    async fn find_unassigned(&self, ids: &[String]) -> Result<Vec<Package>, AppError> {
        let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let state = self.state.read().await;

        Ok(state
            .packages
            .iter()
            .filter(|p| !p.is_assigned() && wanted.contains(p.id.as_str()))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl AssignmentRepository for InMemoryStore {
    async fn commit(
        &self,
        placements: &[Placement],
        trucks_to_deactivate: &[String],
    ) -> Result<(), AppError> {
        let to_deactivate: HashSet<&str> = trucks_to_deactivate.iter().map(String::as_str).collect();
        let mut state = self.state.write().await;

        // Check every guard before touching anything.
        for truck_id in trucks_to_deactivate {
            if !state.trucks.iter().any(|t| &t.id == truck_id && t.available) {
                return Err(AppError::conflict(
                    "Truck is no longer available",
                    json!({ "truck_id": truck_id }),
                ));
            }
        }
        for placement in placements {
            if !to_deactivate.contains(placement.truck_id.as_str()) {
                return Err(AppError::conflict(
                    "Placement targets a truck that is not being loaded",
                    json!({ "package_id": placement.package_id, "truck_id": placement.truck_id }),
                ));
            }
            let open_package = state
                .packages
                .iter()
                .any(|p| p.id == placement.package_id && !p.is_assigned());
            if !open_package {
                return Err(AppError::conflict(
                    "Package is already assigned",
                    json!({ "package_id": placement.package_id }),
                ));
            }
        }

        for truck in state.trucks.iter_mut() {
            if to_deactivate.contains(truck.id.as_str()) {
                truck.available = false;
            }
        }
        for placement in placements {
            if let Some(package) = state
                .packages
                .iter_mut()
                .find(|p| p.id == placement.package_id)
            {
                package.assigned_truck_id = Some(placement.truck_id.clone());
            }
        }

        Ok(())
    }
}
