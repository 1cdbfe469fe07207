//! Route definitions for the `/inspections` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::inspections;
use crate::state::AppState;

/// Routes mounted at `/inspections`.
///
/// ```text
/// GET    /{id}                       -> get_by_id
/// PUT    /{id}                       -> update
/// DELETE /{id}                       -> delete
///
/// POST   /{id}/images                -> add_images (multipart)
/// DELETE /{id}/images/{image_id}     -> delete_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(inspections::get_by_id)
                .put(inspections::update)
                .delete(inspections::delete),
        )
        .route("/{id}/images", post(inspections::add_images))
        .route("/{id}/images/{image_id}", delete(inspections::delete_image))
}
