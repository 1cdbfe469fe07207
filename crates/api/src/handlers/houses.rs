//! Handlers for the `/houses` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use homecheck_core::error::CoreError;
use homecheck_core::types::DbId;
use homecheck_core::validate::non_empty_name;
use homecheck_db::models::house::{CreateHouse, House, UpdateHouse};
use homecheck_db::models::room::{CreateRoom, Room};
use homecheck_db::repositories::{HouseRepo, RoomRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Verify that a house exists, returning the full row.
async fn ensure_house_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<House> {
    HouseRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "House", id }))
}

/// POST /api/v1/houses
pub async fn create(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateHouse>,
) -> AppResult<(StatusCode, Json<House>)> {
    let name = non_empty_name("house name", &input.name)?;
    let house = HouseRepo::create(&state.pool, &CreateHouse { name }).await?;

    tracing::info!(house_id = house.id, "House created");
    Ok((StatusCode::CREATED, Json(house)))
}

/// GET /api/v1/houses
pub async fn list(_auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<House>>> {
    let houses = HouseRepo::list(&state.pool).await?;
    Ok(Json(houses))
}

/// GET /api/v1/houses/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<House>> {
    let house = ensure_house_exists(&state.pool, id).await?;
    Ok(Json(house))
}

/// PUT /api/v1/houses/{id}
pub async fn update(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHouse>,
) -> AppResult<Json<House>> {
    let name = non_empty_name("house name", &input.name)?;
    let house = HouseRepo::update(&state.pool, id, &UpdateHouse { name })
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "House", id }))?;
    Ok(Json(house))
}

/// DELETE /api/v1/houses/{id}
///
/// Hard delete; the database cascades to rooms, inspections, and photos.
pub async fn delete(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = HouseRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(house_id = id, "House deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "House", id }))
    }
}

/// GET /api/v1/houses/{house_id}/rooms
pub async fn list_rooms(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(house_id): Path<DbId>,
) -> AppResult<Json<Vec<Room>>> {
    ensure_house_exists(&state.pool, house_id).await?;
    let rooms = RoomRepo::list_by_house(&state.pool, house_id).await?;
    Ok(Json(rooms))
}

/// POST /api/v1/houses/{house_id}/rooms
pub async fn create_room(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(house_id): Path<DbId>,
    Json(input): Json<CreateRoom>,
) -> AppResult<(StatusCode, Json<Room>)> {
    ensure_house_exists(&state.pool, house_id).await?;
    let name = non_empty_name("room name", &input.name)?;
    let room = RoomRepo::create(&state.pool, house_id, &CreateRoom { name }).await?;

    tracing::info!(room_id = room.id, house_id, "Room created");
    Ok((StatusCode::CREATED, Json(room)))
}
