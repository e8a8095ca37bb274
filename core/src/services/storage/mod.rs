//! Object storage seam
//!
//! The service only talks to storage through [`ObjectUploader`]; the cloud
//! client behind it lives outside this crate.

mod mock;
mod service;
mod traits;


pub use mock::MockObjectUploader;
pub use service::{UploadService, UploadedObject};
pub use traits::{ObjectUploader, StorageError};

/// Public URL of an object in a Google Cloud Storage bucket
pub fn public_object_url(bucket: &str, name: &str) -> String {
    format!("https://storage.googleapis.com/{}/{}", bucket, name)
}
