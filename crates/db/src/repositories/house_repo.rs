//! Repository for the `houses` table.

use sqlx::PgPool;

use homecheck_core::types::DbId;

use crate::models::house::{CreateHouse, House, UpdateHouse};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for houses.
pub struct HouseRepo;

impl HouseRepo {
    /// Insert a new house, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateHouse) -> Result<House, sqlx::Error> {
        let query = format!(
            "INSERT INTO houses (name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, House>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a house by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<House>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM houses WHERE id = $1");
        sqlx::query_as::<_, House>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all houses ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<House>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM houses ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, House>(&query).fetch_all(pool).await
    }

    /// Rename a house. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHouse,
    ) -> Result<Option<House>, sqlx::Error> {
        let query = format!(
            "UPDATE houses SET name = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, House>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a house by ID. The database cascades the delete to rooms,
    /// inspections, and image rows. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM houses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
