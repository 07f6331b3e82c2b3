//! Router creation and configuration

use super::handlers::*;
use super::types::AppState;
use axum::{routing::get, Router};
use kie_core::MarshallingFormat;
use kie_dmn::ModelEvaluatorService;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(service: Arc<ModelEvaluatorService>, default_format: MarshallingFormat) -> Router {
    let state = AppState {
        service,
        default_format,
    };

    Router::new()
        .route("/health", get(health))
        .route("/containers/:container_id/dmn", get(list_models).post(evaluate))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
