use actix_web::HttpResponse;
use serde_json::json;

use crate::handlers::{http_response, ResponseParams};

/// Handler for GET /health
pub async fn health_check() -> HttpResponse {
    http_response(ResponseParams::ok(json!({
        "service": "field-service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}
