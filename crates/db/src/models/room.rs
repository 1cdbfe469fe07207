//! Room entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use homecheck_core::types::{DbId, Timestamp};

/// A room row from the `rooms` table. Always belongs to one house.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: DbId,
    pub house_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new room. The house id comes from the route path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoom {
    pub name: String,
}

/// DTO for renaming a room.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRoom {
    pub name: String,
}
