//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `homecheck_db`
//! and map errors via [`crate::error::AppError`].

pub mod auth;
pub mod houses;
pub mod inspections;
pub mod overview;
pub mod rooms;
