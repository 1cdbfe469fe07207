//! Handler for `GET /overview` -- the denormalized
//! house → room → inspection → photo tree.
//!
//! The tree is assembled from four flat queries, one per table, with
//! children fetched in a single `= ANY($ids)` batch per level. This keeps
//! the whole assembly at four round trips regardless of how many houses
//! or rooms exist.

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use homecheck_core::types::{DbId, Timestamp};
use homecheck_db::models::status::InspectionStatus;
use homecheck_db::repositories::{HouseRepo, InspectionImageRepo, InspectionRepo, RoomRepo};

use crate::error::AppResult;
use crate::handlers::inspections::{group_by_inspection, ImageView};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Tree node types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct HouseNode {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub rooms: Vec<RoomNode>,
}

#[derive(Debug, Serialize)]
pub struct RoomNode {
    pub id: DbId,
    pub name: String,
    pub inspections: Vec<InspectionNode>,
}

#[derive(Debug, Serialize)]
pub struct InspectionNode {
    pub id: DbId,
    pub status: &'static str,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub images: Vec<ImageView>,
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// GET /api/v1/overview
///
/// Houses are ordered newest first; rooms oldest first within a house;
/// the caller's inspections newest first within a room. Only confirmed
/// (`uploaded`) photos appear.
pub async fn tree(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<HouseNode>>>> {
    // 1. All houses.
    let houses = HouseRepo::list(&state.pool).await?;
    let house_ids: Vec<DbId> = houses.iter().map(|h| h.id).collect();

    // 2. Their rooms, one batched query.
    let rooms = if house_ids.is_empty() {
        Vec::new()
    } else {
        RoomRepo::list_by_houses(&state.pool, &house_ids).await?
    };
    let room_ids: Vec<DbId> = rooms.iter().map(|r| r.id).collect();

    // 3. The caller's inspections across those rooms, one batched query.
    let inspections = if room_ids.is_empty() {
        Vec::new()
    } else {
        InspectionRepo::list_by_rooms_for_inspector(&state.pool, &room_ids, auth.user_id).await?
    };
    let inspection_ids: Vec<DbId> = inspections.iter().map(|i| i.id).collect();

    // 4. Confirmed photos across those inspections, one batched query.
    let images = if inspection_ids.is_empty() {
        Vec::new()
    } else {
        InspectionImageRepo::list_uploaded_by_inspections(&state.pool, &inspection_ids).await?
    };

    // Stitch bottom-up. Each grouping map preserves the fetch order of
    // its level, so the per-level ORDER BY carries through to the tree.
    let mut images_by_inspection = group_by_inspection(images);

    let mut inspections_by_room: HashMap<DbId, Vec<InspectionNode>> = HashMap::new();
    for inspection in inspections {
        let images = images_by_inspection
            .remove(&inspection.id)
            .unwrap_or_default();
        inspections_by_room
            .entry(inspection.room_id)
            .or_default()
            .push(InspectionNode {
                id: inspection.id,
                status: InspectionStatus::label_for_id(inspection.status_id),
                notes: inspection.notes,
                created_at: inspection.created_at,
                images: images.into_iter().filter_map(ImageView::from_row).collect(),
            });
    }

    let mut rooms_by_house: HashMap<DbId, Vec<RoomNode>> = HashMap::new();
    for room in rooms {
        let inspections = inspections_by_room.remove(&room.id).unwrap_or_default();
        rooms_by_house.entry(room.house_id).or_default().push(RoomNode {
            id: room.id,
            name: room.name,
            inspections,
        });
    }

    let tree = houses
        .into_iter()
        .map(|house| HouseNode {
            rooms: rooms_by_house.remove(&house.id).unwrap_or_default(),
            id: house.id,
            name: house.name,
            created_at: house.created_at,
        })
        .collect();

    Ok(Json(DataResponse { data: tree }))
}
