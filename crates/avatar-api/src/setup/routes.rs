//! Route configuration and setup.

use crate::constants::{HEALTH_PATH, UPLOAD_AVATAR_PATH};
use crate::handlers::{liveness_check, upload_avatar};
use crate::middleware::cors_headers_middleware;
use crate::state::AppState;
use avatar_core::Config;
use axum::{
    extract::DefaultBodyLimit,
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router<()> {
    // The upload route reads the raw body itself; `any` keeps method
    // rejection inside the handler so it can answer with a JSON body.
    let upload_routes = Router::new()
        .route(UPLOAD_AVATAR_PATH, any(upload_avatar))
        .layer(DefaultBodyLimit::disable());

    let upload_routes = match config.max_upload_size_bytes() {
        Some(limit) => {
            tracing::info!(max_upload_size_bytes = limit, "Upload body limit enabled");
            upload_routes.layer(RequestBodyLimitLayer::new(limit))
        }
        None => {
            tracing::info!("Upload body limit disabled, bodies are buffered in full");
            upload_routes
        }
    };

    Router::new()
        .route(HEALTH_PATH, get(liveness_check))
        .merge(upload_routes)
        .layer(axum::middleware::from_fn(cors_headers_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
