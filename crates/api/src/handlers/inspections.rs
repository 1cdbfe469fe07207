//! Handlers for the `/inspections` resource and the photo attachment
//! workflow.
//!
//! Creating an inspection with photos is a deliberate non-transactional
//! pipeline: insert the inspection row, then per photo write a `pending`
//! marker row, upload the bytes, and confirm the row to `uploaded`. A
//! failed upload is logged and skipped -- the inspection itself is never
//! rolled back, and the stale marker is swept by the reconciliation task.

use std::io::Cursor;

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use homecheck_core::error::CoreError;
use homecheck_core::storage_key::photo_storage_key;
use homecheck_core::types::{DbId, Timestamp};
use homecheck_db::models::inspection::{
    CreateInspection, CreateInspectionImage, Inspection, InspectionImage, UpdateInspection,
};
use homecheck_db::models::status::InspectionStatus;
use homecheck_db::repositories::{InspectionImageRepo, InspectionRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::rooms::ensure_room_exists;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `PUT /inspections/{id}`. Only status and notes are
/// editable here; photo attachments have their own endpoints and are never
/// touched by this path.
#[derive(Debug, Deserialize)]
pub struct UpdateInspectionRequest {
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// An inspection with its confirmed photos, as returned by the API.
#[derive(Debug, Serialize)]
pub struct InspectionView {
    pub id: DbId,
    pub room_id: DbId,
    pub status: &'static str,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub images: Vec<ImageView>,
}

/// A confirmed photo attachment.
#[derive(Debug, Serialize)]
pub struct ImageView {
    pub id: DbId,
    pub url: String,
    pub content_type: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub created_at: Timestamp,
}

impl ImageView {
    /// Build from a confirmed row. Returns `None` for pending markers,
    /// which must never surface in API output.
    pub(crate) fn from_row(row: InspectionImage) -> Option<Self> {
        let url = row.url?;
        Some(Self {
            id: row.id,
            url,
            content_type: row.content_type,
            width: row.width,
            height: row.height,
            created_at: row.created_at,
        })
    }
}

impl InspectionView {
    pub(crate) fn from_rows(inspection: Inspection, images: Vec<InspectionImage>) -> Self {
        Self {
            id: inspection.id,
            room_id: inspection.room_id,
            status: InspectionStatus::label_for_id(inspection.status_id),
            notes: inspection.notes,
            created_at: inspection.created_at,
            updated_at: inspection.updated_at,
            images: images.into_iter().filter_map(ImageView::from_row).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Multipart parsing
// ---------------------------------------------------------------------------

/// A photo staged from a multipart request, already validated as a
/// decodable image.
pub(crate) struct StagedPhoto {
    filename: String,
    content_type: &'static str,
    width: i32,
    height: i32,
    bytes: Vec<u8>,
}

/// Parsed multipart form for inspection creation.
struct InspectionForm {
    status: Option<String>,
    notes: Option<String>,
    photos: Vec<StagedPhoto>,
}

/// Read an inspection multipart form: `status` and `notes` text fields
/// plus any number of `photo` file parts.
async fn read_inspection_form(mut multipart: Multipart) -> AppResult<InspectionForm> {
    let mut form = InspectionForm {
        status: None,
        notes: None,
        photos: Vec::new(),
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "status" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.status = Some(text);
            }
            "notes" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.notes = Some(text);
            }
            "photo" => {
                let filename = field.file_name().unwrap_or("photo").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.photos.push(stage_photo(filename, data.to_vec())?);
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok(form)
}

/// Validate uploaded bytes as a decodable photo and extract metadata.
///
/// Only the image header is decoded, so oversized or malformed pixel data
/// never reaches storage as a "photo".
fn stage_photo(filename: String, bytes: Vec<u8>) -> AppResult<StagedPhoto> {
    let reader = image::ImageReader::new(Cursor::new(&bytes))
        .with_guessed_format()
        .map_err(|e| AppError::BadRequest(format!("Unreadable photo '{filename}': {e}")))?;

    let content_type = match reader.format() {
        Some(image::ImageFormat::Png) => "image/png",
        Some(image::ImageFormat::Jpeg) => "image/jpeg",
        Some(image::ImageFormat::WebP) => "image/webp",
        _ => {
            return Err(AppError::BadRequest(format!(
                "Unsupported photo format for '{filename}'. Supported: png, jpeg, webp"
            )));
        }
    };

    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| AppError::BadRequest(format!("Corrupt photo '{filename}': {e}")))?;

    Ok(StagedPhoto {
        filename,
        content_type,
        width: width as i32,
        height: height as i32,
        bytes,
    })
}

// ---------------------------------------------------------------------------
// Attachment workflow
// ---------------------------------------------------------------------------

/// Run the upload pipeline for already-validated photos: pending marker
/// row, object write, confirm. Returns the confirmed rows.
///
/// Upload failures are logged and skipped -- the caller's inspection row
/// stays in place either way.
async fn attach_photos(
    state: &AppState,
    inspection_id: DbId,
    photos: Vec<StagedPhoto>,
) -> AppResult<Vec<InspectionImage>> {
    let mut confirmed = Vec::new();

    for photo in photos {
        let key = photo_storage_key(
            inspection_id,
            Utc::now().timestamp_millis(),
            &photo.filename,
        );

        let marker = InspectionImageRepo::create_pending(
            &state.pool,
            &CreateInspectionImage {
                inspection_id,
                storage_key: key.clone(),
                content_type: photo.content_type.to_string(),
                width: Some(photo.width),
                height: Some(photo.height),
            },
        )
        .await?;

        match state
            .storage
            .put(&key, photo.bytes, photo.content_type)
            .await
        {
            Ok(url) => {
                if let Some(row) =
                    InspectionImageRepo::mark_uploaded(&state.pool, marker.id, &url).await?
                {
                    confirmed.push(row);
                }
            }
            Err(e) => {
                tracing::warn!(
                    inspection_id,
                    storage_key = %key,
                    error = %e,
                    "Photo upload failed; keeping inspection without this image"
                );
            }
        }
    }

    Ok(confirmed)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/rooms/{room_id}/inspections
///
/// The caller's inspections for one room, newest first, photos embedded.
pub async fn list_by_room(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(room_id): Path<DbId>,
) -> AppResult<Json<Vec<InspectionView>>> {
    ensure_room_exists(&state.pool, room_id).await?;

    let inspections =
        InspectionRepo::list_by_room_for_inspector(&state.pool, room_id, auth.user_id).await?;

    let ids: Vec<DbId> = inspections.iter().map(|i| i.id).collect();
    let mut images_by_inspection = group_by_inspection(if ids.is_empty() {
        Vec::new()
    } else {
        InspectionImageRepo::list_uploaded_by_inspections(&state.pool, &ids).await?
    });

    let views = inspections
        .into_iter()
        .map(|i| {
            let images = images_by_inspection.remove(&i.id).unwrap_or_default();
            InspectionView::from_rows(i, images)
        })
        .collect();

    Ok(Json(views))
}

/// POST /api/v1/rooms/{room_id}/inspections
///
/// Create an inspection from a multipart form (`status`, `notes`, repeated
/// `photo` parts), then run the attachment workflow for any photos.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(room_id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<InspectionView>)> {
    ensure_room_exists(&state.pool, room_id).await?;

    let form = read_inspection_form(multipart).await?;

    // Missing status defaults to pending, matching the entry form default.
    let status = match form.status.as_deref() {
        Some(label) => InspectionStatus::from_name(label)?,
        None => InspectionStatus::Pending,
    };

    let inspection = InspectionRepo::create(
        &state.pool,
        &CreateInspection {
            room_id,
            inspector_id: auth.user_id,
            status_id: status.id(),
            notes: form.notes,
        },
    )
    .await?;

    tracing::info!(
        inspection_id = inspection.id,
        room_id,
        inspector_id = auth.user_id,
        photo_count = form.photos.len(),
        "Inspection created"
    );

    let images = attach_photos(&state, inspection.id, form.photos).await?;

    Ok((
        StatusCode::CREATED,
        Json(InspectionView::from_rows(inspection, images)),
    ))
}

/// GET /api/v1/inspections/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<InspectionView>> {
    let inspection = InspectionRepo::find_for_inspector(&state.pool, id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Inspection",
            id,
        }))?;

    let images = InspectionImageRepo::list_uploaded_by_inspection(&state.pool, id).await?;
    Ok(Json(InspectionView::from_rows(inspection, images)))
}

/// PUT /api/v1/inspections/{id}
///
/// Update status and/or notes. Existing photo links are left untouched.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInspectionRequest>,
) -> AppResult<Json<InspectionView>> {
    let status_id = match input.status.as_deref() {
        Some(label) => Some(InspectionStatus::from_name(label)?.id()),
        None => None,
    };

    let inspection = InspectionRepo::update_for_inspector(
        &state.pool,
        id,
        auth.user_id,
        &UpdateInspection {
            status_id,
            notes: input.notes,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Inspection",
        id,
    }))?;

    let images = InspectionImageRepo::list_uploaded_by_inspection(&state.pool, id).await?;
    Ok(Json(InspectionView::from_rows(inspection, images)))
}

/// DELETE /api/v1/inspections/{id}
///
/// Removes the row (the database cascades to image rows), then
/// best-effort deletes the stored objects.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    // Capture keys before the cascade removes the rows.
    let images = InspectionImageRepo::list_by_inspection(&state.pool, id).await?;

    let deleted = InspectionRepo::delete_for_inspector(&state.pool, id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Inspection",
            id,
        }));
    }

    for image in images {
        if let Err(e) = state.storage.delete(&image.storage_key).await {
            tracing::warn!(
                inspection_id = id,
                storage_key = %image.storage_key,
                error = %e,
                "Failed to delete stored photo; object orphaned"
            );
        }
    }

    tracing::info!(inspection_id = id, "Inspection deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/inspections/{id}/images
///
/// Attach additional photos to an existing inspection (multipart, repeated
/// `photo` parts).
pub async fn add_images(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Vec<ImageView>>)> {
    InspectionRepo::find_for_inspector(&state.pool, id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Inspection",
            id,
        }))?;

    let form = read_inspection_form(multipart).await?;
    if form.photos.is_empty() {
        return Err(AppError::BadRequest(
            "At least one 'photo' part is required".into(),
        ));
    }

    let confirmed = attach_photos(&state, id, form.photos).await?;
    let views = confirmed
        .into_iter()
        .filter_map(ImageView::from_row)
        .collect();

    Ok((StatusCode::CREATED, Json(views)))
}

/// DELETE /api/v1/inspections/{id}/images/{image_id}
///
/// Unlink a photo and best-effort delete its stored object.
pub async fn delete_image(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((id, image_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    InspectionRepo::find_for_inspector(&state.pool, id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Inspection",
            id,
        }))?;

    let image = InspectionImageRepo::find_by_id(&state.pool, id, image_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "InspectionImage",
            id: image_id,
        }))?;

    InspectionImageRepo::delete(&state.pool, image.id).await?;

    if let Err(e) = state.storage.delete(&image.storage_key).await {
        tracing::warn!(
            inspection_id = id,
            storage_key = %image.storage_key,
            error = %e,
            "Failed to delete stored photo; object orphaned"
        );
    }

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Group image rows by their inspection id, preserving fetch order.
pub(crate) fn group_by_inspection(
    rows: Vec<InspectionImage>,
) -> std::collections::HashMap<DbId, Vec<InspectionImage>> {
    let mut map: std::collections::HashMap<DbId, Vec<InspectionImage>> =
        std::collections::HashMap::new();
    for row in rows {
        map.entry(row.inspection_id).or_default().push(row);
    }
    map
}
