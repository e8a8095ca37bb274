//! Unit tests for validation message translation

use fs_shared::types::response::FieldMessage;
use fs_shared::utils::validation::RuleViolation;

use crate::errors::{translate, translate_error, AppError, KnownDomainError, MessageTemplates};

fn messages(violations: &[RuleViolation], templates: &MessageTemplates) -> Vec<String> {
    translate(violations, templates)
        .into_iter()
        .map(|m| m.message)
        .collect()
}

#[test]
fn test_output_preserves_length_and_order() {
    let violations = vec![
        RuleViolation::new("zeta", "required"),
        RuleViolation::new("alpha", "email"),
        RuleViolation::new("mid", "unknown_rule"),
    ];

    let translated = translate(&violations, &MessageTemplates::with_defaults());

    assert_eq!(translated.len(), violations.len());
    let fields: Vec<&str> = translated.iter().map(|m| m.field.as_str()).collect();
    assert_eq!(fields, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_required_and_email_ignore_registry() {
    let templates = MessageTemplates::new()
        .with("required", "%s custom required")
        .with("email", "%s custom email");
    let violations = vec![
        RuleViolation::new("name", "required"),
        RuleViolation::new("contact", "email"),
    ];

    assert_eq!(
        messages(&violations, &templates),
        vec!["name is required", "contact is not a valid email address"]
    );
}

#[test]
fn test_unknown_rule_falls_back() {
    let violations = vec![RuleViolation::new("price", "numeric").with_param("2")];

    assert_eq!(
        messages(&violations, &MessageTemplates::new()),
        vec!["something wrong on price; numeric"]
    );
}

#[test]
fn test_one_placeholder_ignores_param() {
    let templates = MessageTemplates::new().with("alpha", "%s must contain letters only");
    let violations = vec![RuleViolation::new("code", "alpha").with_param("ignored")];

    assert_eq!(messages(&violations, &templates), vec!["code must contain letters only"]);
}

#[test]
fn test_two_placeholders_use_field_and_param() {
    let templates = MessageTemplates::new().with("min", "%s must be at least %s characters");
    let violations = vec![RuleViolation::new("password", "min").with_param("8")];

    assert_eq!(
        messages(&violations, &templates),
        vec!["password must be at least 8 characters"]
    );
}

#[test]
fn test_missing_param_renders_empty() {
    let templates = MessageTemplates::new().with("oneof", "%s must be one of [%s]");
    let violations = vec![RuleViolation::new("status", "oneof")];

    assert_eq!(messages(&violations, &templates), vec!["status must be one of []"]);
}

#[test]
fn test_non_validation_error_translates_to_nothing() {
    let templates = MessageTemplates::with_defaults();

    assert!(translate_error(&AppError::from(KnownDomainError::NotFound), &templates).is_empty());
    assert!(translate_error(&AppError::internal(anyhow::anyhow!("db down")), &templates).is_empty());
}

#[test]
fn test_validation_error_translates() {
    let error = AppError::validation(vec![RuleViolation::new("name", "required")]);

    assert_eq!(
        translate_error(&error, &MessageTemplates::with_defaults()),
        vec![FieldMessage::new("name", "name is required")]
    );
}
