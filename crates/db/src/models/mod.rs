//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) where the API
//!   supports partial updates

pub mod house;
pub mod inspection;
pub mod room;
pub mod session;
pub mod status;
pub mod user;
