//! Route tree construction.

pub mod auth;
pub mod health;
pub mod houses;
pub mod inspections;
pub mod rooms;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                              signup (public)
/// /auth/login                               login (public)
/// /auth/refresh                             refresh (public)
/// /auth/logout                              logout (requires auth)
/// /auth/me                                  current user
///
/// /houses                                   list, create
/// /houses/{id}                              get, update, delete
/// /houses/{house_id}/rooms                  list, create
///
/// /rooms/{id}                               get, update, delete
/// /rooms/{room_id}/inspections              list, create (multipart)
///
/// /inspections/{id}                         get, update, delete
/// /inspections/{id}/images                  attach photos (multipart)
/// /inspections/{id}/images/{image_id}       delete photo
///
/// /overview                                 full house->room->inspection tree
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (signup, login, refresh, logout, me).
        .nest("/auth", auth::router())
        // House routes (also nests house-scoped room listing/creation).
        .nest("/houses", houses::router())
        // Room-scoped operations and inspection listing/creation.
        .nest("/rooms", rooms::router())
        // Inspection-scoped operations and photo attachments.
        .nest("/inspections", inspections::router())
        // The denormalized overview tree.
        .route("/overview", get(handlers::overview::tree))
}
