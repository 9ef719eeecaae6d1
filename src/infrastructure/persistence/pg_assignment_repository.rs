//! PostgreSQL implementation of assignment commits.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::assignment::Placement;
use crate::domain::repositories::AssignmentRepository;
use crate::error::AppError;

/// Commits assignment plans inside a single transaction.
///
/// Truck rows are updated first, so concurrent commits touching the same
/// truck queue on its row lock; the loser then sees `available = FALSE`, its
/// guarded update affects fewer rows than planned, and it rolls back.
pub struct PgAssignmentRepository {
    pool: Arc<PgPool>,
}

impl PgAssignmentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentRepository for PgAssignmentRepository {
    async fn commit(
        &self,
        placements: &[Placement],
        trucks_to_deactivate: &[String],
    ) -> Result<(), AppError> {
        if let Some(stray) = placements
            .iter()
            .find(|p| !trucks_to_deactivate.contains(&p.truck_id))
        {
            return Err(AppError::conflict(
                "Placement targets a truck that is not being loaded",
                json!({ "package_id": stray.package_id, "truck_id": stray.truck_id }),
            ));
        }

        let mut tx = self.pool.begin().await?;

        let flipped = sqlx::query(
            r#"
            UPDATE trucks SET available = FALSE
            WHERE id = ANY($1) AND available = TRUE
            "#,
        )
        .bind(trucks_to_deactivate)
        .execute(&mut *tx)
        .await?;

        if flipped.rows_affected() != trucks_to_deactivate.len() as u64 {
            tx.rollback().await?;
            return Err(AppError::conflict(
                "Truck is no longer available",
                json!({ "trucks": trucks_to_deactivate }),
            ));
        }

        let (package_ids, truck_ids): (Vec<String>, Vec<String>) = placements
            .iter()
            .map(|p| (p.package_id.clone(), p.truck_id.clone()))
            .unzip();

        let assigned = sqlx::query(
            r#"
            UPDATE packages AS p
            SET assigned_truck_id = v.truck_id
            FROM UNNEST($1::TEXT[], $2::TEXT[]) AS v(package_id, truck_id)
            WHERE p.id = v.package_id AND p.assigned_truck_id IS NULL
            "#,
        )
        .bind(&package_ids)
        .bind(&truck_ids)
        .execute(&mut *tx)
        .await?;

        if assigned.rows_affected() != placements.len() as u64 {
            tx.rollback().await?;
            return Err(AppError::conflict(
                "Package is already assigned",
                json!({ "packages": package_ids }),
            ));
        }

        tx.commit().await?;
        Ok(())
    }
}
