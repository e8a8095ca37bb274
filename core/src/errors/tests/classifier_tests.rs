//! Unit tests for client message classification

use fs_shared::utils::validation::RuleViolation;

use crate::errors::{client_message, is_exposable, AppError, KnownDomainError};

#[test]
fn test_every_sentinel_is_exposable() {
    for sentinel in KnownDomainError::ALL {
        let error = AppError::from(sentinel);
        assert!(is_exposable(&error));
        assert_eq!(client_message(&error), sentinel.to_string());
    }
}

#[test]
fn test_same_text_different_identity_is_not_exposable() {
    let error = AppError::internal(anyhow::anyhow!("not found"));

    assert!(!is_exposable(&error));
    assert_eq!(client_message(&error), "internal server error");
}

#[test]
fn test_internal_details_are_hidden() {
    let error = AppError::internal(anyhow::anyhow!("pq: relation \"fields\" does not exist"));

    assert!(!is_exposable(&error));
    assert_eq!(client_message(&error), "internal server error");
}

#[test]
fn test_validation_error_is_not_exposable_as_text() {
    let error = AppError::validation(vec![RuleViolation::new("name", "required")]);

    assert!(!is_exposable(&error));
    assert_eq!(client_message(&error), "internal server error");
}
