//! Shared types for the field service
//!
//! This crate provides the pieces every other crate builds on:
//! - Configuration types and loading
//! - The client-facing response envelope and pagination result
//! - The bridge from the validation engine to rule violations

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use self::config::{
    AppConfig, ConfigError, Environment, LogFormat, LoggingConfig, ServerConfig, StorageConfig,
    ValidationConfig,
};
pub use types::{
    paginate, EnvelopeMessage, FieldMessage, PaginationParams, PaginationResult, ResponseEnvelope,
    ResponseStatus,
};
pub use utils::{validation, violations_from, RuleViolation};
