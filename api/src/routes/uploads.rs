use actix_web::{web, HttpResponse};

use fs_core::services::storage::ObjectUploader;

use crate::handlers::{error_response, http_response, payload_error_response, ResponseParams};
use crate::state::AppState;

/// Handler for POST /api/v1/uploads/{name}
///
/// The request body is stored as-is; `data` holds the object's public URL.
/// A body over the payload limit answers 413 with the envelope.
pub async fn upload_object<U: ObjectUploader + 'static>(
    state: web::Data<AppState<U>>,
    path: web::Path<String>,
    body: Result<web::Bytes, actix_web::Error>,
) -> HttpResponse {
    let body = match body {
        Ok(body) => body,
        Err(err) => return payload_error_response(&err),
    };

    match state.uploads.upload(&path, body.to_vec()).await {
        Ok(uploaded) => http_response(ResponseParams::ok(uploaded)),
        Err(err) => error_response(err, &state.templates),
    }
}
