pub mod field;

pub use field::{CreateFieldRequest, FieldResponse};
