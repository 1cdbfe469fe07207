//! Repository for the `rooms` table.

use sqlx::PgPool;

use homecheck_core::types::DbId;

use crate::models::room::{CreateRoom, Room, UpdateRoom};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, house_id, name, created_at, updated_at";

/// Provides CRUD operations for rooms.
pub struct RoomRepo;

impl RoomRepo {
    /// Insert a new room under a house, returning the created row.
    pub async fn create(
        pool: &PgPool,
        house_id: DbId,
        input: &CreateRoom,
    ) -> Result<Room, sqlx::Error> {
        let query = format!(
            "INSERT INTO rooms (house_id, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(house_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a room by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = $1");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all rooms of one house, oldest first (stable form order).
    pub async fn list_by_house(pool: &PgPool, house_id: DbId) -> Result<Vec<Room>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rooms WHERE house_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(house_id)
            .fetch_all(pool)
            .await
    }

    /// Batched fetch for the overview tree: all rooms belonging to any of
    /// the given houses, oldest first.
    pub async fn list_by_houses(
        pool: &PgPool,
        house_ids: &[DbId],
    ) -> Result<Vec<Room>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rooms WHERE house_id = ANY($1) ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(house_ids)
            .fetch_all(pool)
            .await
    }

    /// Rename a room. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRoom,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!(
            "UPDATE rooms SET name = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a room by ID. Cascades to inspections and image rows.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
