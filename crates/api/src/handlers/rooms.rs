//! Handlers for the `/rooms` resource.
//!
//! Room listing/creation lives under `/houses/{house_id}/rooms`; this
//! module covers the room-scoped operations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use homecheck_core::error::CoreError;
use homecheck_core::types::DbId;
use homecheck_core::validate::non_empty_name;
use homecheck_db::models::room::{Room, UpdateRoom};
use homecheck_db::repositories::RoomRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Verify that a room exists, returning the full row.
pub(crate) async fn ensure_room_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Room> {
    RoomRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))
}

/// GET /api/v1/rooms/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Room>> {
    let room = ensure_room_exists(&state.pool, id).await?;
    Ok(Json(room))
}

/// PUT /api/v1/rooms/{id}
pub async fn update(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRoom>,
) -> AppResult<Json<Room>> {
    let name = non_empty_name("room name", &input.name)?;
    let room = RoomRepo::update(&state.pool, id, &UpdateRoom { name })
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;
    Ok(Json(room))
}

/// DELETE /api/v1/rooms/{id}
///
/// Hard delete; the database cascades to inspections and photos.
pub async fn delete(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = RoomRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(room_id = id, "Room deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Room", id }))
    }
}
