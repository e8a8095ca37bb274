//! In-memory uploader for tests and local runs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::public_object_url;
use super::traits::{ObjectUploader, StorageError};

pub struct MockObjectUploader {
    bucket: String,
    objects: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    should_fail: bool,
}

impl MockObjectUploader {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            objects: Arc::new(RwLock::new(HashMap::new())),
            should_fail: false,
        }
    }

    /// Uploader whose every call fails
    pub fn failing(bucket: impl Into<String>) -> Self {
        Self {
            should_fail: true,
            ..Self::new(bucket)
        }
    }

    pub async fn object(&self, name: &str) -> Option<Vec<u8>> {
        self.objects.read().await.get(name).cloned()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait]
impl ObjectUploader for MockObjectUploader {
    async fn upload(&self, name: &str, bytes: Vec<u8>) -> Result<String, StorageError> {
        if self.should_fail {
            return Err(StorageError::UploadFailed {
                name: name.to_string(),
                reason: "mock storage rejected the object".to_string(),
            });
        }
        self.objects.write().await.insert(name.to_string(), bytes);
        Ok(public_object_url(&self.bucket, name))
    }
}
