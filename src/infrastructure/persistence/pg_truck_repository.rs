//! PostgreSQL implementation of truck repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::dimensions::Dimensions;
use crate::domain::entities::{NewTruck, Truck};
use crate::domain::repositories::TruckRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct TruckRow {
    id: String,
    length: f64,
    width: f64,
    height: f64,
    volume: f64,
    available: bool,
    created_at: DateTime<Utc>,
}

impl From<TruckRow> for Truck {
    fn from(r: TruckRow) -> Self {
        let dimensions = Dimensions {
            length: r.length,
            width: r.width,
            height: r.height,
            volume: r.volume,
        };
        Truck::new(r.id, dimensions, r.available, r.created_at)
    }
}

/// PostgreSQL repository for truck storage and availability queries.
pub struct PgTruckRepository {
    pool: Arc<PgPool>,
}

impl PgTruckRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TruckRepository for PgTruckRepository {
    async fn create(&self, new_truck: NewTruck) -> Result<Truck, AppError> {
        let dims = new_truck.dimensions;
        let row = sqlx::query_as::<_, TruckRow>(
            r#"
            INSERT INTO trucks (id, length, width, height, volume, available)
            VALUES ($1, $2, $3, $4, $5, TRUE)
            RETURNING id, length, width, height, volume, available, created_at
            "#,
        )
        .bind(&new_truck.id)
        .bind(dims.length)
        .bind(dims.width)
        .bind(dims.height)
        .bind(dims.volume)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Truck>, AppError> {
        let row = sqlx::query_as::<_, TruckRow>(
            r#"
            SELECT id, length, width, height, volume, available, created_at
            FROM trucks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Truck::from))
    }

    async fn list_available(&self) -> Result<Vec<Truck>, AppError> {
        self.list(true).await
    }

    async fn list(&self, only_available: bool) -> Result<Vec<Truck>, AppError> {
        let rows = sqlx::query_as::<_, TruckRow>(
            r#"
            SELECT id, length, width, height, volume, available, created_at
            FROM trucks
            WHERE (NOT $1 OR available = TRUE)
            ORDER BY created_at, id
            "#,
        )
        .bind(only_available)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Truck::from).collect())
    }

    async fn count_available(&self) -> Result<i64, AppError> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM trucks WHERE available = TRUE")
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(count)
    }
}
