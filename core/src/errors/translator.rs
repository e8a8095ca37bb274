//! Translation of rule violations into field messages

use fs_shared::types::response::FieldMessage;
use fs_shared::utils::validation::RuleViolation;

use super::templates::{render, MessageTemplates};
use super::AppError;

/// Field messages for `error`; empty when it is not a validation failure.
pub fn translate_error(error: &AppError, templates: &MessageTemplates) -> Vec<FieldMessage> {
    match error {
        AppError::Validation(violations) => translate(violations, templates),
        _ => Vec::new(),
    }
}

/// Translate each violation, keeping input order.
pub fn translate(violations: &[RuleViolation], templates: &MessageTemplates) -> Vec<FieldMessage> {
    violations
        .iter()
        .map(|violation| FieldMessage::new(&violation.field, message_for(violation, templates)))
        .collect()
}

fn message_for(violation: &RuleViolation, templates: &MessageTemplates) -> String {
    let field = violation.field.as_str();
    match violation.rule.as_str() {
        "required" => format!("{} is required", field),
        "email" => format!("{} is not a valid email address", field),
        rule => match templates.get(rule) {
            Some(template) => render(template, field, violation.param_or_empty()),
            None => format!("something wrong on {}; {}", field, rule),
        },
    }
}
