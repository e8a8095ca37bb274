use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing_actix_web::TracingLogger;

use fs_api::{create_app, telemetry::init_tracing, AppState};
use fs_core::errors::MessageTemplates;
use fs_core::services::storage::MockObjectUploader;
use fs_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    init_tracing(&config.logging)?;
    tracing::info!(environment = %config.environment, "starting field service");

    // Templates are built once and shared read-only by every worker
    let templates = MessageTemplates::from_config(&config.validation);
    tracing::debug!(templates = templates.len(), "validation templates loaded");

    // Uploads are held in process memory
    if config.environment.is_production() {
        tracing::warn!(bucket = %config.storage.bucket_name, "using the in-memory object uploader");
    }
    let uploader = Arc::new(MockObjectUploader::new(config.storage.bucket_name.clone()));
    let state = web::Data::new(AppState::new(
        templates,
        uploader,
        config.storage.max_upload_size,
    ));

    let bind_address = config.server.bind_address();
    let max_payload_size = config.server.max_payload_size;
    tracing::info!(address = %bind_address, "server will bind");

    let mut server = HttpServer::new(move || {
        create_app(state.clone(), max_payload_size).wrap(TracingLogger::default())
    })
    .bind(&bind_address)?;

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.run().await?;
    Ok(())
}
