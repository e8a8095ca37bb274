//! Application state shared by all workers

use std::sync::Arc;
use tokio::sync::RwLock;

use fs_core::errors::MessageTemplates;
use fs_core::services::storage::{ObjectUploader, UploadService};

use crate::dto::FieldResponse;

/// Holds the validation templates built at startup plus request-time services
pub struct AppState<U: ObjectUploader> {
    pub templates: MessageTemplates,
    pub fields: RwLock<Vec<FieldResponse>>,
    pub uploads: UploadService<U>,
}

impl<U: ObjectUploader> AppState<U> {
    pub fn new(templates: MessageTemplates, uploader: Arc<U>, max_upload_size: usize) -> Self {
        Self {
            templates,
            fields: RwLock::new(Vec::new()),
            uploads: UploadService::new(uploader, max_upload_size),
        }
    }

    pub fn with_fields(self, fields: Vec<FieldResponse>) -> Self {
        Self {
            fields: RwLock::new(fields),
            ..self
        }
    }
}
