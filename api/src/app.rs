//! Application factory
//!
//! Builds the Actix-web application around an already initialized
//! [`AppState`]. Middleware that changes the response body type, such as the
//! request logger, is added by the caller.

use actix_web::{web, App};

use fs_core::services::storage::ObjectUploader;

use crate::handlers::{json_error_handler, not_found, query_error_handler};
use crate::routes::{fields, health::health_check, uploads::upload_object};
use crate::state::AppState;

/// Create and configure the application with all routes
pub fn create_app<U>(
    app_state: web::Data<AppState<U>>,
    max_payload_size: usize,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: ObjectUploader + 'static,
{
    App::new()
        // Add application state
        .app_data(app_state)
        // Extractor failures are answered with the envelope
        .app_data(
            web::JsonConfig::default()
                .limit(max_payload_size)
                .error_handler(json_error_handler),
        )
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PayloadConfig::new(max_payload_size))
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/fields")
                        .route("", web::get().to(fields::list_fields::<U>))
                        .route("", web::post().to(fields::create_field::<U>))
                        .route("/{uuid}", web::get().to(fields::get_field::<U>)),
                )
                .route("/uploads/{name}", web::post().to(upload_object::<U>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}
