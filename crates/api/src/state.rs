use std::sync::Arc;

use homecheck_cloud::ObjectStorage;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: homecheck_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Photo object storage provider (S3 or local filesystem).
    pub storage: Arc<dyn ObjectStorage>,
}
