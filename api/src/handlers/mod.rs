//! Response writing shared by all routes

pub mod error;
pub mod response;

pub use error::{json_error_handler, not_found, payload_error_response, query_error_handler};
pub use response::{build, error_response, http_response, ResponseParams};
