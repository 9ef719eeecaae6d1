//! Repository trait for package records.

use crate::domain::entities::{NewPackage, Package};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing packages.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPackageRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageRepository: Send + Sync {
    /// Inserts a new, unassigned package.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the id already exists.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_package: NewPackage) -> Result<Package, AppError>;

    /// Finds a package by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<Package>, AppError>;

    /// Returns the packages among `ids` that exist and have no truck yet.
    ///
    /// Unknown ids are ignored. Results come back in retrieval order
    /// (`created_at`, then `id`), not in the order of `ids`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_unassigned(&self, ids: &[String]) -> Result<Vec<Package>, AppError>;
}
