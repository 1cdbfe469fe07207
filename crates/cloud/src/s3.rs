//! S3-compatible object storage provider (AWS S3, MinIO, R2).

use aws_sdk_s3::primitives::ByteStream;

use crate::{ObjectStorage, StorageConfig, StorageError};

/// Photo storage backed by an S3-compatible bucket.
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    bucket: String,
    /// Base for public URLs. When unset, the standard
    /// `https://{bucket}.s3.{region}.amazonaws.com` form is used.
    public_base_url: Option<String>,
    region: String,
}

impl S3Storage {
    /// Build a client from [`StorageConfig`] plus the ambient AWS
    /// credential chain (env vars, profile, instance metadata).
    pub async fn from_config(config: &StorageConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));
        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        // Path-style addressing is required by MinIO and most self-hosted
        // S3 implementations.
        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);
        if config.endpoint.is_some() {
            builder = builder.force_path_style(true);
        }

        Self {
            client: aws_sdk_s3::Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
            public_base_url: config.public_base_url.clone(),
            region: config.region.clone(),
        }
    }

    /// Public URL for an object key.
    fn public_url(&self, key: &str) -> String {
        match &self.public_base_url {
            Some(base) => format!("{}/{key}", base.trim_end_matches('/')),
            None => format!(
                "https://{}.s3.{}.amazonaws.com/{key}",
                self.bucket, self.region
            ),
        }
    }
}

#[async_trait::async_trait]
impl ObjectStorage for S3Storage {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::Provider(format!("put_object failed: {e}")))?;

        Ok(self.public_url(key))
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Provider(format!("delete_object failed: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage(base: Option<&str>) -> S3Storage {
        // Client construction needs an async context; these tests only
        // exercise URL formatting, so build the struct directly.
        let sdk_config = aws_sdk_s3::Config::builder()
            .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new("eu-west-1"))
            .build();
        S3Storage {
            client: aws_sdk_s3::Client::from_conf(sdk_config),
            bucket: "inspection-images".to_string(),
            public_base_url: base.map(str::to_string),
            region: "eu-west-1".to_string(),
        }
    }

    #[test]
    fn default_public_url_uses_virtual_host_form() {
        let s = storage(None);
        assert_eq!(
            s.public_url("inspections/1/x.png"),
            "https://inspection-images.s3.eu-west-1.amazonaws.com/inspections/1/x.png"
        );
    }

    #[test]
    fn configured_base_url_wins() {
        let s = storage(Some("https://cdn.example.com/photos/"));
        assert_eq!(
            s.public_url("inspections/1/x.png"),
            "https://cdn.example.com/photos/inspections/1/x.png"
        );
    }
}
