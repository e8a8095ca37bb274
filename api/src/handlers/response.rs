//! Writes the response envelope
//!
//! Every handler answers through [`http_response`] so that clients always get
//! the same JSON shape:
//!
//! ```json
//! { "status": "success", "message": "OK", "data": { ... }, "token": "..." }
//! { "status": "error", "message": "field not found", "data": null }
//! { "status": "error", "message": [{ "field": "name", "message": "name is required" }], "data": null }
//! ```

use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

use fs_core::errors::{client_message, translate_error, AppError, MessageTemplates};
use fs_shared::types::response::{EnvelopeMessage, ResponseEnvelope};

/// Message for a validation failure that names no field
pub const VALIDATION_FAILED_MESSAGE: &str = "validation failed";

/// Everything needed to write one response
pub struct ResponseParams<T> {
    pub code: StatusCode,
    pub err: Option<AppError>,
    /// Overrides the message derived from `err`
    pub message: Option<EnvelopeMessage>,
    pub data: Option<T>,
    pub token: Option<String>,
}

impl<T> ResponseParams<T> {
    /// 200 with `data`
    pub fn ok(data: T) -> Self {
        Self::success(StatusCode::OK, Some(data))
    }

    pub fn success(code: StatusCode, data: Option<T>) -> Self {
        Self {
            code,
            err: None,
            message: None,
            data,
            token: None,
        }
    }

    pub fn error(code: StatusCode, err: AppError) -> Self {
        Self {
            code,
            err: Some(err),
            message: None,
            data: None,
            token: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<EnvelopeMessage>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

impl ResponseParams<()> {
    /// Error response with the status code and message the taxonomy assigns
    /// to `err`; validation failures carry their field messages, or a fixed
    /// text when no field is named.
    pub fn from_error(err: AppError, templates: &MessageTemplates) -> Self {
        let code = StatusCode::from_u16(err.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let message = match &err {
            AppError::Validation(violations) if violations.is_empty() => {
                Some(EnvelopeMessage::from(VALIDATION_FAILED_MESSAGE))
            }
            AppError::Validation(_) => Some(EnvelopeMessage::Fields(translate_error(&err, templates))),
            _ => None,
        };

        Self {
            message,
            ..Self::error(code, err)
        }
    }
}

/// Assemble the envelope.
///
/// Without an error this is a success envelope carrying `data` and a non-empty
/// `token`. With an error the message is `message` if given, else the error's
/// text when it is exposable, else the generic internal error; `data` and
/// `token` are dropped.
pub fn build<T>(
    err: Option<&AppError>,
    message: Option<EnvelopeMessage>,
    data: Option<T>,
    token: Option<String>,
) -> ResponseEnvelope<T> {
    match err {
        None => ResponseEnvelope::success(data, token),
        Some(err) => {
            ResponseEnvelope::error(message.unwrap_or_else(|| EnvelopeMessage::Text(client_message(err))))
        }
    }
}

/// Write the envelope for `params` with its status code.
pub fn http_response<T: Serialize>(params: ResponseParams<T>) -> HttpResponse {
    match &params.err {
        Some(AppError::Domain(sentinel)) => {
            tracing::debug!(
                status = params.code.as_u16(),
                code = sentinel.code(),
                "responding with domain error"
            );
        }
        Some(err) => {
            tracing::debug!(status = params.code.as_u16(), error = %err, "responding with error");
        }
        None => {}
    }

    let envelope = build(params.err.as_ref(), params.message, params.data, params.token);
    HttpResponse::build(params.code).json(envelope)
}

/// Error response for `err` using the taxonomy's status code.
pub fn error_response(err: AppError, templates: &MessageTemplates) -> HttpResponse {
    http_response(ResponseParams::from_error(err, templates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fs_core::errors::KnownDomainError;
    use fs_shared::types::response::{FieldMessage, ResponseStatus};
    use fs_shared::utils::validation::RuleViolation;

    #[test]
    fn success_ignores_message_override() {
        let envelope = build(None, Some("ignored".into()), Some(5), Some("token".to_string()));

        assert_eq!(envelope.status, ResponseStatus::Success);
        assert_eq!(envelope.message, EnvelopeMessage::Text("OK".to_string()));
        assert_eq!(envelope.data, Some(5));
        assert_eq!(envelope.token.as_deref(), Some("token"));
    }

    #[test]
    fn explicit_message_wins_over_error_text() {
        let err = AppError::from(KnownDomainError::FieldNotFound);
        let envelope = build::<()>(Some(&err), Some("custom".into()), None, None);

        assert_eq!(envelope.message, EnvelopeMessage::Text("custom".to_string()));
    }

    #[test]
    fn exposable_error_text_is_used() {
        let err = AppError::from(KnownDomainError::TimeAlreadyBooked);
        let envelope = build::<()>(Some(&err), None, None, None);

        assert_eq!(envelope.status, ResponseStatus::Error);
        assert_eq!(envelope.message, EnvelopeMessage::Text("time already booked".to_string()));
    }

    #[test]
    fn unclassified_error_text_is_replaced() {
        let err = AppError::internal(anyhow::anyhow!("connection refused (os error 111)"));
        let envelope = build::<()>(Some(&err), None, None, None);

        assert_eq!(envelope.message, EnvelopeMessage::Text("internal server error".to_string()));
    }

    #[test]
    fn error_drops_data_and_token() {
        let err = AppError::from(KnownDomainError::NotFound);
        let envelope = build(Some(&err), None, Some(1), Some("token".to_string()));

        assert_eq!(envelope.data, None);
        assert_eq!(envelope.token, None);
    }

    #[test]
    fn from_error_uses_taxonomy() {
        let templates = MessageTemplates::with_defaults();

        let validation = ResponseParams::from_error(
            AppError::validation(vec![RuleViolation::new("name", "required")]),
            &templates,
        );
        assert_eq!(validation.code, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            validation.message,
            Some(EnvelopeMessage::Fields(vec![FieldMessage::new("name", "name is required")]))
        );

        let domain = ResponseParams::from_error(KnownDomainError::FieldNotFound.into(), &templates);
        assert_eq!(domain.code, StatusCode::NOT_FOUND);
        assert_eq!(domain.message, None);

        let internal =
            ResponseParams::from_error(AppError::internal(anyhow::anyhow!("boom")), &templates);
        assert_eq!(internal.code, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn empty_validation_keeps_validation_wording() {
        let templates = MessageTemplates::with_defaults();
        let params = ResponseParams::from_error(AppError::validation(Vec::new()), &templates);

        assert_eq!(params.code, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(params.message, Some(EnvelopeMessage::Text("validation failed".to_string())));

        let envelope = build::<()>(params.err.as_ref(), params.message, None, None);
        assert_eq!(envelope.message, EnvelopeMessage::Text("validation failed".to_string()));
    }
}
