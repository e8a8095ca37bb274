//! Route handlers
//!
//! - `health` - liveness probe
//! - `fields` - paginated listing, lookup and creation of fields
//! - `uploads` - object uploads through the storage seam

pub mod fields;
pub mod health;
pub mod uploads;
