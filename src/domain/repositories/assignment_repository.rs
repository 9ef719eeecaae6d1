//! Repository trait for committing assignment plans.

use crate::domain::assignment::Placement;
use crate::error::AppError;
use async_trait::async_trait;

/// Atomic write side of an assignment run.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAssignmentRepository`] - PostgreSQL transaction
/// - [`crate::infrastructure::persistence::InMemoryStore`] - Single write lock
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Writes every placement and flips every listed truck to unavailable,
    /// all or nothing.
    ///
    /// A placement only applies to a package that is still unassigned, and a
    /// truck only flips if it is still available. If any of those guards
    /// fails nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a guard failed (another run got there
    /// first). Returns [`AppError::Internal`] on storage errors.
    async fn commit(
        &self,
        placements: &[Placement],
        trucks_to_deactivate: &[String],
    ) -> Result<(), AppError>;
}
