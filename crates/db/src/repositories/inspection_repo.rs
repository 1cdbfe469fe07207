//! Repository for the `inspections` table.
//!
//! All read and write paths are scoped to the authoring inspector: users
//! only ever see and touch their own inspections.

use sqlx::PgPool;

use homecheck_core::types::DbId;

use crate::models::inspection::{CreateInspection, Inspection, UpdateInspection};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, room_id, inspector_id, status_id, notes, created_at, updated_at";

/// Provides CRUD operations for inspections.
pub struct InspectionRepo;

impl InspectionRepo {
    /// Insert a new inspection, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInspection,
    ) -> Result<Inspection, sqlx::Error> {
        let query = format!(
            "INSERT INTO inspections (room_id, inspector_id, status_id, notes)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inspection>(&query)
            .bind(input.room_id)
            .bind(input.inspector_id)
            .bind(input.status_id)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find an inspection by ID, visible only to its author.
    pub async fn find_for_inspector(
        pool: &PgPool,
        id: DbId,
        inspector_id: DbId,
    ) -> Result<Option<Inspection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inspections WHERE id = $1 AND inspector_id = $2");
        sqlx::query_as::<_, Inspection>(&query)
            .bind(id)
            .bind(inspector_id)
            .fetch_optional(pool)
            .await
    }

    /// List one room's inspections authored by the given user, newest first.
    pub async fn list_by_room_for_inspector(
        pool: &PgPool,
        room_id: DbId,
        inspector_id: DbId,
    ) -> Result<Vec<Inspection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inspections
             WHERE room_id = $1 AND inspector_id = $2
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Inspection>(&query)
            .bind(room_id)
            .bind(inspector_id)
            .fetch_all(pool)
            .await
    }

    /// Batched fetch for the overview tree: the user's inspections across
    /// any of the given rooms, newest first.
    pub async fn list_by_rooms_for_inspector(
        pool: &PgPool,
        room_ids: &[DbId],
        inspector_id: DbId,
    ) -> Result<Vec<Inspection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inspections
             WHERE room_id = ANY($1) AND inspector_id = $2
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Inspection>(&query)
            .bind(room_ids)
            .bind(inspector_id)
            .fetch_all(pool)
            .await
    }

    /// Update status and/or notes. Only non-`None` fields are applied.
    /// Image rows are untouched by this path.
    ///
    /// Returns `None` if the row does not exist or belongs to another user.
    pub async fn update_for_inspector(
        pool: &PgPool,
        id: DbId,
        inspector_id: DbId,
        input: &UpdateInspection,
    ) -> Result<Option<Inspection>, sqlx::Error> {
        let query = format!(
            "UPDATE inspections SET
                status_id = COALESCE($3, status_id),
                notes = COALESCE($4, notes),
                updated_at = NOW()
             WHERE id = $1 AND inspector_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inspection>(&query)
            .bind(id)
            .bind(inspector_id)
            .bind(input.status_id)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete an inspection owned by the given user. Cascades to image
    /// rows. Returns `true` if a row was removed.
    pub async fn delete_for_inspector(
        pool: &PgPool,
        id: DbId,
        inspector_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM inspections WHERE id = $1 AND inspector_id = $2")
            .bind(id)
            .bind(inspector_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
