//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod house_repo;
pub mod inspection_image_repo;
pub mod inspection_repo;
pub mod room_repo;
pub mod session_repo;
pub mod user_repo;

pub use house_repo::HouseRepo;
pub use inspection_image_repo::InspectionImageRepo;
pub use inspection_repo::InspectionRepo;
pub use room_repo::RoomRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
