//! Route definitions for the `/rooms` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{inspections, rooms};
use crate::state::AppState;

/// Routes mounted at `/rooms`.
///
/// ```text
/// GET    /{id}                       -> get_by_id
/// PUT    /{id}                       -> update
/// DELETE /{id}                       -> delete
///
/// GET    /{room_id}/inspections      -> list_by_room
/// POST   /{room_id}/inspections      -> create (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(rooms::get_by_id).put(rooms::update).delete(rooms::delete),
        )
        .route(
            "/{room_id}/inspections",
            get(inspections::list_by_room).post(inspections::create),
        )
}
