use actix_web::{web, HttpResponse};
use validator::Validate;

use fs_core::errors::AppError;
use fs_core::services::storage::ObjectUploader;
use fs_shared::types::pagination::PaginationParams;

use crate::dto::FieldResponse;
use crate::handlers::{error_response, http_response, ResponseParams};
use crate::state::AppState;

/// Handler for GET /api/v1/fields?page=&limit=
///
/// Responds with a pagination result as `data`:
///
/// ```json
/// {
///     "status": "success",
///     "message": "OK",
///     "data": {
///         "totalPage": 3, "totalData": 25, "nextPage": 3, "prevPage": 1,
///         "page": 2, "limit": 10, "data": [ ... ]
///     }
/// }
/// ```
pub async fn list_fields<U: ObjectUploader + 'static>(
    state: web::Data<AppState<U>>,
    query: web::Query<PaginationParams>,
) -> HttpResponse {
    let params = query.into_inner();
    if let Err(errors) = params.validate() {
        return error_response(AppError::from(errors), &state.templates);
    }

    let fields = state.fields.read().await;
    let offset = usize::try_from(params.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(params.limit).unwrap_or(usize::MAX);
    let page: Vec<FieldResponse> = fields.iter().skip(offset).take(limit).cloned().collect();

    http_response(ResponseParams::ok(params.paginate(fields.len() as u64, page)))
}
