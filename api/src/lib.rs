//! HTTP layer of the field service
//!
//! Every response, success or failure, is written as the JSON envelope from
//! [`handlers::response`].

pub mod app;
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use app::create_app;
pub use state::AppState;
