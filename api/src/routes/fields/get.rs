use actix_web::{web, HttpResponse};
use uuid::Uuid;

use fs_core::errors::{AppError, KnownDomainError};
use fs_core::services::storage::ObjectUploader;

use crate::handlers::{error_response, http_response, ResponseParams};
use crate::state::AppState;

/// Handler for GET /api/v1/fields/{uuid}
pub async fn get_field<U: ObjectUploader + 'static>(
    state: web::Data<AppState<U>>,
    path: web::Path<String>,
) -> HttpResponse {
    // A malformed id cannot match any field
    let Ok(uuid) = Uuid::parse_str(&path) else {
        return error_response(AppError::from(KnownDomainError::FieldNotFound), &state.templates);
    };

    let fields = state.fields.read().await;
    match fields.iter().find(|field| field.uuid == uuid) {
        Some(field) => http_response(ResponseParams::ok(field.clone())),
        None => error_response(AppError::from(KnownDomainError::FieldNotFound), &state.templates),
    }
}
