use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;

use fs_core::errors::{AppError, KnownDomainError};
use fs_core::services::storage::ObjectUploader;

use crate::dto::{CreateFieldRequest, FieldResponse};
use crate::handlers::{error_response, http_response, ResponseParams};
use crate::state::AppState;

/// Handler for POST /api/v1/fields
///
/// # Request Body
///
/// ```json
/// { "code": "FLD-01", "name": "Futsal Arena", "price_per_hour": 150000 }
/// ```
///
/// # Errors
///
/// - 422 with one `{field, message}` entry per failed rule
/// - 409 `"field already exists"` when the code is taken
pub async fn create_field<U: ObjectUploader + 'static>(
    state: web::Data<AppState<U>>,
    body: web::Json<CreateFieldRequest>,
) -> HttpResponse {
    let request = body.into_inner();
    if let Err(errors) = request.validate() {
        tracing::warn!(rules = errors.errors().len(), "create field request failed validation");
        return error_response(AppError::from(errors), &state.templates);
    }

    let mut fields = state.fields.write().await;
    if fields.iter().any(|field| Some(&field.code) == request.code.as_ref()) {
        return error_response(
            AppError::from(KnownDomainError::FieldAlreadyExists),
            &state.templates,
        );
    }

    let field = FieldResponse::from_request(request);
    fields.push(field.clone());
    tracing::info!(uuid = %field.uuid, code = %field.code, "field created");

    http_response(ResponseParams::success(StatusCode::CREATED, Some(field)))
}
