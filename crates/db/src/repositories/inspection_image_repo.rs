//! Repository for the `inspection_images` table.
//!
//! Rows implement the attachment saga: inserted as `pending` markers
//! before the object upload, confirmed to `uploaded` afterwards. Listing
//! queries only surface confirmed rows; pending rows exist solely for
//! reconciliation.

use sqlx::PgPool;

use homecheck_core::types::{DbId, Timestamp};

use crate::models::inspection::{CreateInspectionImage, InspectionImage};
use crate::models::status::ImageStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, inspection_id, storage_key, url, status_id, content_type, \
                        width, height, created_at, updated_at";

/// Provides CRUD operations for inspection photos.
pub struct InspectionImageRepo;

impl InspectionImageRepo {
    /// Insert a pending marker row, returning it.
    pub async fn create_pending(
        pool: &PgPool,
        input: &CreateInspectionImage,
    ) -> Result<InspectionImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO inspection_images (inspection_id, storage_key, status_id, content_type, width, height)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InspectionImage>(&query)
            .bind(input.inspection_id)
            .bind(&input.storage_key)
            .bind(ImageStatus::Pending.id())
            .bind(&input.content_type)
            .bind(input.width)
            .bind(input.height)
            .fetch_one(pool)
            .await
    }

    /// Confirm a pending row after the object write succeeded: set the
    /// public URL and flip the status to `uploaded`.
    pub async fn mark_uploaded(
        pool: &PgPool,
        id: DbId,
        url: &str,
    ) -> Result<Option<InspectionImage>, sqlx::Error> {
        let query = format!(
            "UPDATE inspection_images SET url = $2, status_id = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InspectionImage>(&query)
            .bind(id)
            .bind(url)
            .bind(ImageStatus::Uploaded.id())
            .fetch_optional(pool)
            .await
    }

    /// Find an image row by ID scoped to its inspection.
    pub async fn find_by_id(
        pool: &PgPool,
        inspection_id: DbId,
        id: DbId,
    ) -> Result<Option<InspectionImage>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM inspection_images WHERE id = $1 AND inspection_id = $2");
        sqlx::query_as::<_, InspectionImage>(&query)
            .bind(id)
            .bind(inspection_id)
            .fetch_optional(pool)
            .await
    }

    /// List all confirmed photos of one inspection, oldest first.
    pub async fn list_uploaded_by_inspection(
        pool: &PgPool,
        inspection_id: DbId,
    ) -> Result<Vec<InspectionImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inspection_images
             WHERE inspection_id = $1 AND status_id = $2
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, InspectionImage>(&query)
            .bind(inspection_id)
            .bind(ImageStatus::Uploaded.id())
            .fetch_all(pool)
            .await
    }

    /// Batched fetch for the overview tree: all confirmed photos across
    /// any of the given inspections, oldest first.
    pub async fn list_uploaded_by_inspections(
        pool: &PgPool,
        inspection_ids: &[DbId],
    ) -> Result<Vec<InspectionImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inspection_images
             WHERE inspection_id = ANY($1) AND status_id = $2
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, InspectionImage>(&query)
            .bind(inspection_ids)
            .bind(ImageStatus::Uploaded.id())
            .fetch_all(pool)
            .await
    }

    /// List all rows (any status) of one inspection. Used when deleting an
    /// inspection to clean up stored objects.
    pub async fn list_by_inspection(
        pool: &PgPool,
        inspection_id: DbId,
    ) -> Result<Vec<InspectionImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inspection_images
             WHERE inspection_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, InspectionImage>(&query)
            .bind(inspection_id)
            .fetch_all(pool)
            .await
    }

    /// Pending markers older than `cutoff` -- uploads that never
    /// confirmed. The reconciliation sweeper consumes these.
    pub async fn list_pending_older_than(
        pool: &PgPool,
        cutoff: Timestamp,
    ) -> Result<Vec<InspectionImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inspection_images
             WHERE status_id = $1 AND created_at < $2
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, InspectionImage>(&query)
            .bind(ImageStatus::Pending.id())
            .bind(cutoff)
            .fetch_all(pool)
            .await
    }

    /// Delete an image row by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM inspection_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
