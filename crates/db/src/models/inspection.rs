//! Inspection and inspection-image models and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use homecheck_core::types::{DbId, Timestamp};

use crate::models::status::StatusId;

/// An inspection row from the `inspections` table.
///
/// `status_id` is the raw column value; handlers convert it to the API
/// label via [`crate::models::status::InspectionStatus`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Inspection {
    pub id: DbId,
    pub room_id: DbId,
    pub inspector_id: DbId,
    pub status_id: StatusId,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new inspection.
#[derive(Debug, Clone)]
pub struct CreateInspection {
    pub room_id: DbId,
    pub inspector_id: DbId,
    pub status_id: StatusId,
    pub notes: Option<String>,
}

/// DTO for updating an inspection's status and/or notes. Image rows are
/// never touched by this path.
#[derive(Debug, Clone)]
pub struct UpdateInspection {
    pub status_id: Option<StatusId>,
    pub notes: Option<String>,
}

/// An inspection photo row from the `inspection_images` table.
///
/// Rows are written with `status_id = pending` before the object upload
/// and flipped to `uploaded` (with `url` set) once the write is confirmed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InspectionImage {
    pub id: DbId,
    pub inspection_id: DbId,
    pub storage_key: String,
    pub url: Option<String>,
    pub status_id: StatusId,
    pub content_type: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for writing a pending image marker row.
#[derive(Debug, Clone)]
pub struct CreateInspectionImage {
    pub inspection_id: DbId,
    pub storage_key: String,
    pub content_type: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
}
