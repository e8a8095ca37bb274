//! Services built on the error pipeline.

pub mod storage;

pub use storage::{
    public_object_url, MockObjectUploader, ObjectUploader, StorageError, UploadService,
    UploadedObject,
};
