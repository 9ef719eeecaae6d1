//! Package registration and lookup service.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::domain::dimensions::Dimensions;
use crate::domain::entities::{NewPackage, Package};
use crate::domain::repositories::PackageRepository;
use crate::error::AppError;

/// Service for registering packages and reading their state.
pub struct PackageService {
    package_repository: Arc<dyn PackageRepository>,
}

impl PackageService {
    /// Creates a new package service.
    pub fn new(package_repository: Arc<dyn PackageRepository>) -> Self {
        Self { package_repository }
    }

    /// Registers an unassigned package with a fresh random id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_package(&self, dimensions: Dimensions) -> Result<Package, AppError> {
        let new_package = NewPackage {
            id: Uuid::new_v4().to_string(),
            dimensions,
        };

        let package = self.package_repository.create(new_package).await?;
        tracing::info!(package_id = %package.id, volume = package.volume, "Package registered");

        Ok(package)
    }

    /// Retrieves a package by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no package has this id.
    pub async fn get_package(&self, id: &str) -> Result<Package, AppError> {
        self.package_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("package_not_found", "Package not found", json!({ "id": id }))
            })
    }
}
