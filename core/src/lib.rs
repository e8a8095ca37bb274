//! # Field Service Core
//!
//! Turns failures into client-safe messages: the domain error catalog,
//! validation message templates, the validation translator and the exposure
//! classifier. Also holds the object storage seam.

pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use errors::{
    client_message, is_exposable, translate, translate_error, AppError, AppResult,
    KnownDomainError, MessageTemplates,
};
pub use services::{MockObjectUploader, ObjectUploader, StorageError, UploadService};
