//! Extractor failures and unknown routes, answered with the envelope

use actix_web::{
    error::{InternalError, JsonPayloadError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};

use fs_core::errors::{AppError, KnownDomainError};

use super::response::{http_response, ResponseParams};

pub const INVALID_BODY_MESSAGE: &str = "invalid request body";
pub const INVALID_QUERY_MESSAGE: &str = "invalid query parameters";

/// Malformed or oversized JSON bodies
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(path = req.path(), error = %err, "rejected request body");

    let status = match err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        _ => StatusCode::BAD_REQUEST,
    };
    let response = http_response(
        ResponseParams::<()>::error(status, AppError::Unclassified(anyhow::anyhow!(err.to_string())))
            .with_message(INVALID_BODY_MESSAGE),
    );
    InternalError::from_response(err, response).into()
}

/// Query strings that do not deserialize
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(path = req.path(), error = %err, "rejected query string");

    let response = http_response(
        ResponseParams::<()>::error(
            StatusCode::BAD_REQUEST,
            AppError::Unclassified(anyhow::anyhow!(err.to_string())),
        )
        .with_message(INVALID_QUERY_MESSAGE),
    );
    InternalError::from_response(err, response).into()
}

/// Raw bodies the payload extractor rejected
pub fn payload_error_response(err: &actix_web::Error) -> HttpResponse {
    let status = match err.as_response_error().status_code() {
        StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
        _ => StatusCode::BAD_REQUEST,
    };
    tracing::debug!(status = status.as_u16(), error = %err, "rejected request payload");

    http_response(
        ResponseParams::<()>::error(status, AppError::Unclassified(anyhow::anyhow!(err.to_string())))
            .with_message(INVALID_BODY_MESSAGE),
    )
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    http_response(ResponseParams::<()>::error(
        StatusCode::NOT_FOUND,
        AppError::from(KnownDomainError::NotFound),
    ))
}
