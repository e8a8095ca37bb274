use serde::Serialize;
use std::sync::Arc;

use fs_shared::utils::validation::RuleViolation;

use super::traits::ObjectUploader;
use crate::errors::{AppError, AppResult};

/// Result of a successful upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedObject {
    pub name: String,
    pub url: String,
    pub size: usize,
}

/// Validates uploads and hands them to the configured uploader
pub struct UploadService<U: ObjectUploader> {
    uploader: Arc<U>,
    max_size: usize,
}

impl<U: ObjectUploader> UploadService<U> {
    pub fn new(uploader: Arc<U>, max_size: usize) -> Self {
        Self { uploader, max_size }
    }

    /// Store `bytes` as `name`.
    ///
    /// Empty or oversized input is a validation failure; a storage failure is
    /// logged and reported as an internal error.
    pub async fn upload(&self, name: &str, bytes: Vec<u8>) -> AppResult<UploadedObject> {
        let mut violations = Vec::new();
        if name.trim().is_empty() {
            violations.push(RuleViolation::new("filename", "required"));
        }
        if bytes.is_empty() {
            violations.push(RuleViolation::new("file", "required"));
        } else if bytes.len() > self.max_size {
            violations.push(RuleViolation::new("file", "max_size").with_param(self.max_size.to_string()));
        }
        if !violations.is_empty() {
            return Err(AppError::validation(violations));
        }

        let size = bytes.len();
        let url = self
            .uploader
            .upload(name, bytes)
            .await
            .map_err(AppError::internal)?;

        tracing::info!(name, size, "object uploaded");

        Ok(UploadedObject {
            name: name.to_string(),
            url,
            size,
        })
    }
}
