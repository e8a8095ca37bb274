//! Object storage configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Bucket receiving uploaded objects
    pub bucket_name: String,

    /// Largest accepted upload in bytes
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket_name: String::from("field-service"),
            max_upload_size: default_max_upload_size(),
        }
    }
}

fn default_max_upload_size() -> usize {
    5 * 1024 * 1024 // 5 MB
}
