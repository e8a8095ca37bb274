//! Error taxonomy and its translation into client-facing messages.

pub mod classifier;
pub mod domain_error;
pub mod templates;
pub mod translator;

#[cfg(test)]
mod tests;

pub use classifier::{client_message, is_exposable};
pub use domain_error::KnownDomainError;
pub use templates::MessageTemplates;
pub use translator::{translate, translate_error};

use fs_shared::utils::validation::{violations_from, RuleViolation};
use thiserror::Error;

/// Every failure a request can end with, classified where it originates
#[derive(Error, Debug)]
pub enum AppError {
    /// Field-level rule violations reported by the validation engine
    #[error("validation failed: {} rule violation(s)", .0.len())]
    Validation(Vec<RuleViolation>),

    /// A curated error whose text may be shown to the client
    #[error(transparent)]
    Domain(#[from] KnownDomainError),

    /// Anything else; its text never leaves the server
    #[error(transparent)]
    Unclassified(anyhow::Error),
}

impl AppError {
    /// Wrap an unexpected failure, logging it for operators.
    pub fn internal(error: impl Into<anyhow::Error>) -> Self {
        let error = error.into();
        tracing::error!(error = ?error, "unclassified error");
        AppError::Unclassified(error)
    }

    pub fn validation(violations: Vec<RuleViolation>) -> Self {
        AppError::Validation(violations)
    }

    /// HTTP status the error is reported with
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Validation(_) => 422,
            AppError::Domain(sentinel) => sentinel.status_code(),
            AppError::Unclassified(_) => 500,
        }
    }
}

/// A bare sentinel becomes `Domain`. A sentinel carrying added context stays
/// unclassified and is not exposed.
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        if error.chain().count() == 1 {
            if let Some(sentinel) = error.downcast_ref::<KnownDomainError>() {
                return AppError::Domain(*sentinel);
            }
        }
        AppError::internal(error)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(violations_from(&errors))
    }
}

pub type AppResult<T> = Result<T, AppError>;
