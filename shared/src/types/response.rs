//! Client-facing response envelope

use serde::{Deserialize, Serialize};

/// Text used as the success message of every envelope.
pub const SUCCESS_MESSAGE: &str = "OK";

/// Generic text sent in place of any message that is not safe to expose.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Envelope status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Client-facing translation of one failed validation rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMessage {
    pub field: String,
    pub message: String,
}

impl FieldMessage {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The `message` member of an envelope: plain text or a list of field messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnvelopeMessage {
    Text(String),
    Fields(Vec<FieldMessage>),
}

impl From<String> for EnvelopeMessage {
    fn from(value: String) -> Self {
        EnvelopeMessage::Text(value)
    }
}

impl From<&str> for EnvelopeMessage {
    fn from(value: &str) -> Self {
        EnvelopeMessage::Text(value.to_string())
    }
}

impl From<Vec<FieldMessage>> for EnvelopeMessage {
    fn from(value: Vec<FieldMessage>) -> Self {
        EnvelopeMessage::Fields(value)
    }
}

/// Top-level JSON object returned for every request, success or error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    pub status: ResponseStatus,

    pub message: EnvelopeMessage,

    /// Payload; always `null` on error
    pub data: Option<T>,

    /// Only serialized for successful responses that carry a token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl<T> ResponseEnvelope<T> {
    /// Create a success envelope. An empty token is dropped.
    pub fn success(data: Option<T>, token: Option<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: EnvelopeMessage::Text(SUCCESS_MESSAGE.to_string()),
            data,
            token: token.filter(|t| !t.is_empty()),
        }
    }

    /// Create an error envelope
    pub fn error(message: impl Into<EnvelopeMessage>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            data: None,
            token: None,
        }
    }
}
