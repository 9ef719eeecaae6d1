//! Repository trait for truck records.

use crate::domain::entities::{NewTruck, Truck};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing trucks.
///
/// Every list operation returns trucks in retrieval order (`created_at`, then
/// `id`, ascending). The assignment engine uses that order to break ties, so
/// implementations must keep it stable.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTruckRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TruckRepository: Send + Sync {
    /// Inserts a new truck. New trucks are always available.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the id already exists.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_truck: NewTruck) -> Result<Truck, AppError>;

    /// Finds a truck by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<Truck>, AppError>;

    /// Lists trucks whose `available` flag is still set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_available(&self) -> Result<Vec<Truck>, AppError>;

    /// Lists all trucks, or only available ones when `only_available` is set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self, only_available: bool) -> Result<Vec<Truck>, AppError>;

    /// Counts available trucks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count_available(&self) -> Result<i64, AppError>;
}
