//! Validation message templates
//!
//! A template holds `%s` placeholders: the first receives the field name and
//! the second the rule parameter. The table is built once at startup and only
//! read afterwards; share it by reference.

use fs_shared::config::ValidationConfig;
use std::collections::HashMap;

/// Placeholder substituted in templates
pub const PLACEHOLDER: &str = "%s";

const DEFAULT_TEMPLATES: [(&str, &str); 10] = [
    ("min", "%s must be at least %s"),
    ("max", "%s must be at most %s"),
    ("length", "%s length must be within %s"),
    ("range", "%s must be within %s"),
    ("url", "%s is not a valid url"),
    ("must_match", "%s must match %s"),
    ("contains", "%s must contain %s"),
    ("does_not_contain", "%s must not contain %s"),
    ("regex", "%s has an invalid format"),
    ("max_size", "%s must not be larger than %s bytes"),
];

/// Rule name to message template table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageTemplates {
    templates: HashMap<String, String>,
}

impl MessageTemplates {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table preloaded with the built-in templates
    pub fn with_defaults() -> Self {
        DEFAULT_TEMPLATES
            .iter()
            .fold(Self::new(), |templates, (rule, template)| templates.with(*rule, *template))
    }

    /// Built-in templates overridden by configured ones
    pub fn from_config(config: &ValidationConfig) -> Self {
        let mut templates = Self::with_defaults();
        templates.extend(config.messages.clone());
        templates
    }

    /// Register or replace the template for `rule`
    pub fn with(mut self, rule: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(rule, template);
        self
    }

    pub fn insert(&mut self, rule: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(rule.into(), template.into());
    }

    pub fn get(&self, rule: &str) -> Option<&str> {
        self.templates.get(rule).map(String::as_str)
    }

    pub fn contains(&self, rule: &str) -> bool {
        self.templates.contains_key(rule)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Extend<(String, String)> for MessageTemplates {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.templates.extend(iter);
    }
}

/// Fill `template` with `field` and `param`.
///
/// One placeholder takes the field only; two or more take the field then the
/// param, and any further placeholders are left untouched.
pub fn render(template: &str, field: &str, param: &str) -> String {
    let args: &[&str] = match template.matches(PLACEHOLDER).count() {
        0 => return template.to_string(),
        1 => &[field],
        _ => &[field, param],
    };

    let mut pieces = template.split(PLACEHOLDER);
    let mut rendered = pieces.next().unwrap_or_default().to_string();
    for (index, piece) in pieces.enumerate() {
        match args.get(index) {
            Some(arg) => rendered.push_str(arg),
            None => rendered.push_str(PLACEHOLDER),
        }
        rendered.push_str(piece);
    }
    rendered
}
