//! Validation message configuration

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Overrides for validation message templates, keyed by rule name.
///
/// Templates use `%s` placeholders: the first is the field name, the second
/// the rule parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

impl ValidationConfig {
    pub fn with_message(mut self, rule: impl Into<String>, template: impl Into<String>) -> Self {
        self.messages.insert(rule.into(), template.into());
        self
    }
}
