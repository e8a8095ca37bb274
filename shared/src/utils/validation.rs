//! Bridge from the validation engine to rule violations

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// Rule parameters listed first when a rule carries several of them
const LEADING_PARAMS: [&str; 3] = ["min", "max", "equal"];

/// One failed validation constraint on one input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleViolation {
    pub field: String,
    pub rule: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

impl RuleViolation {
    pub fn new(field: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule: rule.into(),
            param: None,
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    /// Parameter text, empty when the rule has none
    pub fn param_or_empty(&self) -> &str {
        self.param.as_deref().unwrap_or_default()
    }
}

/// Flatten validator output into an ordered list of violations.
///
/// Fields are visited by ascending name since the engine keeps them in a hash
/// map. Nested structs produce `parent.child` names and lists produce
/// `items[0].name`.
pub fn violations_from(errors: &ValidationErrors) -> Vec<RuleViolation> {
    let mut violations = Vec::new();
    collect(errors, None, &mut violations);
    violations
}

fn collect(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Vec<RuleViolation>) {
    let mut entries: Vec<(String, &ValidationErrorsKind)> = errors
        .errors()
        .iter()
        .map(|(name, kind)| (name.to_string(), kind))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    for (name, kind) in entries {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, name),
            None => name,
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    out.push(RuleViolation {
                        field: path.clone(),
                        rule: rule_name(error),
                        param: render_params(error.params.iter().map(|(k, v)| (k.as_ref(), v))),
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, Some(&path), out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, Some(&format!("{}[{}]", path, index)), out);
                }
            }
        }
    }
}

/// A `range` bounded on one side is reported as that side's `min` or `max`
/// rule.
fn rule_name(error: &ValidationError) -> String {
    if error.code == "range" {
        let bounds: Vec<&str> = error
            .params
            .keys()
            .map(|key| key.as_ref())
            .filter(|key| *key == "min" || *key == "max")
            .collect();
        if let [bound] = bounds.as_slice() {
            return bound.to_string();
        }
    }
    error.code.to_string()
}

/// One param renders as its bare value; several as `key=value` pairs.
fn render_params<'a>(params: impl Iterator<Item = (&'a str, &'a Value)>) -> Option<String> {
    let mut params: Vec<(&str, &Value)> = params.filter(|(key, _)| *key != "value").collect();
    params.sort_by_key(|(key, _)| {
        let rank = LEADING_PARAMS
            .iter()
            .position(|leading| leading == key)
            .unwrap_or(LEADING_PARAMS.len());
        (rank, *key)
    });

    match params.as_slice() {
        [] => None,
        [(_, value)] => Some(value_text(value)),
        many => Some(
            many.iter()
                .map(|(key, value)| format!("{}={}", key, value_text(value)))
                .collect::<Vec<_>>()
                .join(", "),
        ),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
