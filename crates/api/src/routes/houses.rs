//! Route definitions for the `/houses` resource.
//!
//! Also nests room listing/creation under `/houses/{house_id}/rooms`.

use axum::routing::get;
use axum::Router;

use crate::handlers::houses;
use crate::state::AppState;

/// Routes mounted at `/houses`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
///
/// GET    /{house_id}/rooms        -> list_rooms
/// POST   /{house_id}/rooms        -> create_room
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(houses::list).post(houses::create))
        .route(
            "/{id}",
            get(houses::get_by_id)
                .put(houses::update)
                .delete(houses::delete),
        )
        .route(
            "/{house_id}/rooms",
            get(houses::list_rooms).post(houses::create_room),
        )
}
