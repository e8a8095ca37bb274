//! Integration tests for error to envelope mapping

use actix_web::{body::to_bytes, http::StatusCode};
use serde_json::{json, Value};

use fs_api::handlers::{error_response, http_response, ResponseParams};
use fs_core::errors::{AppError, KnownDomainError, MessageTemplates};
use fs_shared::utils::validation::RuleViolation;

async fn body_of(response: actix_web::HttpResponse) -> Value {
    let bytes = to_bytes(response.into_body()).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[actix_web::test]
async fn test_every_sentinel_is_exposed_with_its_status() {
    let templates = MessageTemplates::with_defaults();

    for sentinel in KnownDomainError::ALL {
        let response = error_response(sentinel.into(), &templates);
        assert_eq!(response.status().as_u16(), sentinel.status_code());

        let body = body_of(response).await;
        assert_eq!(body["message"], sentinel.to_string());
    }
}

#[actix_web::test]
async fn test_wrapped_sentinel_is_not_exposed() {
    let templates = MessageTemplates::with_defaults();
    let wrapped = anyhow::Error::new(KnownDomainError::FieldNotFound).context("loading schedule");

    let response = error_response(AppError::from(wrapped), &templates);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_of(response).await;
    assert_eq!(body["message"], "internal server error");
}

#[actix_web::test]
async fn test_bare_sentinel_through_anyhow_is_exposed() {
    let templates = MessageTemplates::with_defaults();
    let bare = anyhow::Error::new(KnownDomainError::TimeAlreadyBooked);

    let response = error_response(AppError::from(bare), &templates);
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_of(response).await;
    assert_eq!(body["message"], "time already booked");
}

#[actix_web::test]
async fn test_configured_template_overrides_default() {
    let templates = MessageTemplates::with_defaults().with("min", "%s needs %s or more");
    let err = AppError::validation(vec![RuleViolation::new("age", "min").with_param("18")]);

    let body = body_of(error_response(err, &templates)).await;
    assert_eq!(body["message"], json!([{ "field": "age", "message": "age needs 18 or more" }]));
}

#[actix_web::test]
async fn test_unknown_rule_falls_back_to_generic_text() {
    let templates = MessageTemplates::new();
    let err = AppError::validation(vec![RuleViolation::new("slug", "lowercase")]);

    let body = body_of(error_response(err, &templates)).await;
    assert_eq!(
        body["message"],
        json!([{ "field": "slug", "message": "something wrong on slug; lowercase" }])
    );
}

#[actix_web::test]
async fn test_success_envelope_carries_token() {
    let response = http_response(ResponseParams::ok(json!({ "id": 1 })).with_token("abc"));
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_of(response).await;
    assert_eq!(
        body,
        json!({ "status": "success", "message": "OK", "data": { "id": 1 }, "token": "abc" })
    );
}

#[actix_web::test]
async fn test_success_envelope_omits_empty_token() {
    let body = body_of(http_response(ResponseParams::ok(1).with_token(""))).await;
    assert!(body.get("token").is_none());
}
