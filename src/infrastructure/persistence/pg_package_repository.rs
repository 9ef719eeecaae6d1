//! PostgreSQL implementation of package repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::dimensions::Dimensions;
use crate::domain::entities::{NewPackage, Package};
use crate::domain::repositories::PackageRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct PackageRow {
    id: String,
    length: f64,
    width: f64,
    height: f64,
    volume: f64,
    assigned_truck_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<PackageRow> for Package {
    fn from(r: PackageRow) -> Self {
        let dimensions = Dimensions {
            length: r.length,
            width: r.width,
            height: r.height,
            volume: r.volume,
        };
        Package::new(r.id, dimensions, r.assigned_truck_id, r.created_at)
    }
}

/// PostgreSQL repository for package storage and eligibility lookups.
pub struct PgPackageRepository {
    pool: Arc<PgPool>,
}

impl PgPackageRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PackageRepository for PgPackageRepository {
    async fn create(&self, new_package: NewPackage) -> Result<Package, AppError> {
        let dims = new_package.dimensions;
        let row = sqlx::query_as::<_, PackageRow>(
            r#"
            INSERT INTO packages (id, length, width, height, volume)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, length, width, height, volume, assigned_truck_id, created_at
            "#,
        )
        .bind(&new_package.id)
        .bind(dims.length)
        .bind(dims.width)
        .bind(dims.height)
        .bind(dims.volume)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Package>, AppError> {
        let row = sqlx::query_as::<_, PackageRow>(
            r#"
            SELECT id, length, width, height, volume, assigned_truck_id, created_at
            FROM packages
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Package::from))
    }

    async fn find_unassigned(&self, ids: &[String]) -> Result<Vec<Package>, AppError> {
        let rows = sqlx::query_as::<_, PackageRow>(
            r#"
            SELECT id, length, width, height, volume, assigned_truck_id, created_at
            FROM packages
            WHERE id = ANY($1) AND assigned_truck_id IS NULL
            ORDER BY created_at, id
            "#,
        )
        .bind(ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Package::from).collect())
    }
}
