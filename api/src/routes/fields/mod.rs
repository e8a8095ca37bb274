//! Field route handlers

pub mod create;
pub mod get;
pub mod list;

pub use create::create_field;
pub use get::get_field;
pub use list::list_fields;
