// src/services/storage.rs
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("S3 bucket not configured")]
    NotConfigured,

    #[error("failed to read staged file: {0}")]
    Staging(String),

    #[error("upload failed: {0}")]
    UploadFailed(String),
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    pub bucket: String,
}

/// Blob store client. Resumes go in as untyped objects so arbitrary document
/// formats (PDF, DOCX, plain text) come back out byte-for-byte.
#[derive(Debug)]
pub struct StorageService {
    client: S3Client,
    config: StorageConfig,
}

impl StorageService {
    /// Build the S3 client once at startup from static credentials
    pub async fn new(config: StorageConfig) -> Self {
        let credentials = Credentials::new(
            &config.access_key_id,
            &config.secret_access_key,
            None,
            None,
            "environment",
        );

        let region = Region::new(config.region.clone());

        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .credentials_provider(credentials)
            .load()
            .await;

        Self {
            client: S3Client::new(&aws_config),
            config,
        }
    }

    /// Upload a staged file under `key` and return its public URL.
    ///
    /// `put_object` overwrites an existing object with the same key, which is
    /// what gives same-named resume re-uploads their de-duplication.
    pub async fn upload_file(&self, path: &Path, key: &str) -> Result<String, StorageError> {
        if self.config.bucket.is_empty() {
            return Err(StorageError::NotConfigured);
        }

        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| StorageError::Staging(e.to_string()))?;

        self.client
            .put_object()
            .bucket(&self.config.bucket)
            .key(key)
            .body(body)
            .content_type("application/octet-stream")
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, key = %key, "Failed to upload file to S3");
                StorageError::UploadFailed(e.to_string())
            })?;

        let url = self.object_url(key);
        info!(key = %key, bucket = %self.config.bucket, "File uploaded to S3 successfully");
        Ok(url)
    }

    /// Stable public URL for an object key
    pub fn object_url(&self, key: &str) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.config.bucket, self.config.region, key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(bucket: &str) -> StorageConfig {
        StorageConfig {
            access_key_id: "test_key".to_string(),
            secret_access_key: "test_secret".to_string(),
            region: "us-east-1".to_string(),
            bucket: bucket.to_string(),
        }
    }

    #[tokio::test]
    async fn test_object_url() {
        let storage = StorageService::new(test_config("my-bucket")).await;
        assert_eq!(
            storage.object_url("cvs/cv"),
            "https://my-bucket.s3.us-east-1.amazonaws.com/cvs/cv"
        );
    }

    #[tokio::test]
    async fn test_upload_without_bucket_is_not_configured() {
        let storage = StorageService::new(test_config("")).await;
        let result = storage
            .upload_file(Path::new("/nonexistent"), "cvs/cv")
            .await;
        assert!(matches!(result, Err(StorageError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_upload_missing_staged_file_is_staging_error() {
        let storage = StorageService::new(test_config("my-bucket")).await;
        let result = storage
            .upload_file(Path::new("/nonexistent/staged.upload"), "cvs/cv")
            .await;
        assert!(matches!(result, Err(StorageError::Staging(_))));
    }
}
