//! Trait for object storage integration

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("failed to upload {name}: {reason}")]
    UploadFailed { name: String, reason: String },
}

/// Uploads raw bytes under a name and returns where they can be fetched
#[async_trait]
pub trait ObjectUploader: Send + Sync {
    async fn upload(&self, name: &str, bytes: Vec<u8>) -> Result<String, StorageError>;
}
