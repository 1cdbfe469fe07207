//! Local-filesystem storage provider for development and tests.

use std::path::PathBuf;

use crate::{ObjectStorage, StorageError};

/// Default public base URL when none is configured. Matches the static
/// file mount a dev frontend would proxy.
const DEFAULT_PUBLIC_BASE: &str = "http://localhost:3000/photos";

/// Photo storage writing objects under a base directory.
pub struct LocalStorage {
    base_dir: PathBuf,
    public_base_url: String,
}

impl LocalStorage {
    pub fn new(base_dir: impl Into<PathBuf>, public_base_url: Option<&str>) -> Self {
        Self {
            base_dir: base_dir.into(),
            public_base_url: public_base_url
                .unwrap_or(DEFAULT_PUBLIC_BASE)
                .trim_end_matches('/')
                .to_string(),
        }
    }
}

#[async_trait::async_trait]
impl ObjectStorage for LocalStorage {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<String, StorageError> {
        let path = self.base_dir.join(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, &bytes).await?;
        Ok(format!("{}/{key}", self.public_base_url))
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        match tokio::fs::remove_file(self.base_dir.join(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_writes_file_and_returns_url() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path(), Some("http://photos.test"));

        let url = storage
            .put("inspections/5/1_a.png", b"bytes".to_vec(), "image/png")
            .await
            .unwrap();

        assert_eq!(url, "http://photos.test/inspections/5/1_a.png");
        let on_disk = std::fs::read(dir.path().join("inspections/5/1_a.png")).unwrap();
        assert_eq!(on_disk, b"bytes");
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path(), None);

        storage
            .put("inspections/5/1_a.png", b"bytes".to_vec(), "image/png")
            .await
            .unwrap();
        storage.delete("inspections/5/1_a.png").await.unwrap();
        // Second delete of a missing object is fine.
        storage.delete("inspections/5/1_a.png").await.unwrap();

        assert!(!dir.path().join("inspections/5/1_a.png").exists());
    }
}
