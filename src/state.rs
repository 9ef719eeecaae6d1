//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AssignmentService, PackageService, TruckService};
use crate::domain::assignment::AssignmentEngine;
use crate::domain::repositories::{AssignmentRepository, PackageRepository, TruckRepository};
use crate::infrastructure::persistence::InMemoryStore;

#[derive(Clone)]
pub struct AppState {
    pub truck_service: Arc<TruckService>,
    pub package_service: Arc<PackageService>,
    pub assignment_service: Arc<AssignmentService>,
    /// Storage backend name reported by the health check.
    pub store_backend: &'static str,
}

impl AppState {
    /// Wires the services over the given record store roles.
    pub fn new(
        truck_repository: Arc<dyn TruckRepository>,
        package_repository: Arc<dyn PackageRepository>,
        assignment_repository: Arc<dyn AssignmentRepository>,
        engine: AssignmentEngine,
        store_backend: &'static str,
    ) -> Self {
        Self {
            truck_service: Arc::new(TruckService::new(truck_repository.clone())),
            package_service: Arc::new(PackageService::new(package_repository.clone())),
            assignment_service: Arc::new(AssignmentService::new(
                package_repository,
                truck_repository,
                assignment_repository,
                engine,
            )),
            store_backend,
        }
    }

    /// State backed by a fresh [`InMemoryStore`].
    pub fn in_memory(engine: AssignmentEngine) -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::new(store.clone(), store.clone(), store, engine, "memory")
    }
}
