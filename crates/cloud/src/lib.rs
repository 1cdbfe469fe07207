//! Object storage providers for inspection photos.
//!
//! The api crate talks to storage exclusively through the [`ObjectStorage`]
//! trait; which provider backs it is a deployment decision
//! (`STORAGE_BACKEND=s3|local`). Objects are publicly readable by URL --
//! there is no per-object access control.

use std::sync::Arc;

use async_trait::async_trait;

pub mod local;
pub mod s3;

pub use local::LocalStorage;
pub use s3::S3Storage;

/// Errors from an object storage provider.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage provider error: {0}")]
    Provider(String),
}

/// Abstraction over the photo object store.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Write `bytes` under `key`, returning the durable public URL the
    /// object can be fetched from.
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError>;

    /// Remove the object under `key`. Deleting a missing object is not an
    /// error.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage configuration loaded from environment variables.
///
/// | Env Var                  | Default             | Applies to |
/// |--------------------------|---------------------|------------|
/// | `STORAGE_BACKEND`        | `local`             | both       |
/// | `STORAGE_BUCKET`         | `inspection-images` | s3         |
/// | `STORAGE_REGION`         | `us-east-1`         | s3         |
/// | `STORAGE_ENDPOINT`       | --                  | s3 (MinIO/R2) |
/// | `STORAGE_PUBLIC_BASE_URL`| derived             | both       |
/// | `STORAGE_LOCAL_DIR`      | `storage/photos`    | local      |
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: String,
    pub bucket: String,
    pub region: String,
    pub endpoint: Option<String>,
    pub public_base_url: Option<String>,
    pub local_dir: String,
}

impl StorageConfig {
    /// Load storage configuration from environment variables with defaults.
    pub fn from_env() -> Self {
        Self {
            backend: std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "local".into()),
            bucket: std::env::var("STORAGE_BUCKET")
                .unwrap_or_else(|_| "inspection-images".into()),
            region: std::env::var("STORAGE_REGION").unwrap_or_else(|_| "us-east-1".into()),
            endpoint: std::env::var("STORAGE_ENDPOINT").ok(),
            public_base_url: std::env::var("STORAGE_PUBLIC_BASE_URL").ok(),
            local_dir: std::env::var("STORAGE_LOCAL_DIR")
                .unwrap_or_else(|_| "storage/photos".into()),
        }
    }

    /// Construct the provider this configuration selects.
    pub async fn build(&self) -> Result<Arc<dyn ObjectStorage>, StorageError> {
        match self.backend.as_str() {
            "s3" => Ok(Arc::new(S3Storage::from_config(self).await)),
            "local" => Ok(Arc::new(LocalStorage::new(
                &self.local_dir,
                self.public_base_url.as_deref(),
            ))),
            other => Err(StorageError::Provider(format!(
                "Unknown STORAGE_BACKEND '{other}'. Must be 's3' or 'local'"
            ))),
        }
    }
}
