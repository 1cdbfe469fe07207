//! House entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use homecheck_core::types::{DbId, Timestamp};

/// A house row from the `houses` table. Root of the record hierarchy.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct House {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new house.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHouse {
    pub name: String,
}

/// DTO for renaming a house.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateHouse {
    pub name: String,
}
