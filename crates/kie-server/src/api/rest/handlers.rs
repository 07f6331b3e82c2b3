//! API endpoint handlers
//!
//! Evaluation faults are carried in the envelope and always answered with
//! 200; only format problems become HTTP errors.

use super::extractors::NegotiatedFormat;
use super::types::{AppState, HealthResponse};
use crate::error::ServerError;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    Json,
};
use kie_core::{MarshallingFormat, ServiceResponse};
use serde::Serialize;
use tracing::info;

/// Health check endpoint
pub(super) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        containers: state.service.registry().container_ids(),
    })
}

/// List the models of a container
pub(super) async fn list_models(
    State(state): State<AppState>,
    Path(container_id): Path<String>,
    NegotiatedFormat(format): NegotiatedFormat,
) -> Result<Response, ServerError> {
    info!("Listing models of container '{}'", container_id);
    let response = state.service.get_models(&container_id).await;
    envelope(format, &response)
}

/// Evaluate decisions in a container
pub(super) async fn evaluate(
    State(state): State<AppState>,
    Path(container_id): Path<String>,
    NegotiatedFormat(format): NegotiatedFormat,
    body: Bytes,
) -> Result<Response, ServerError> {
    info!(
        "Received evaluation request for container '{}' ({} bytes, {})",
        container_id,
        body.len(),
        format
    );
    let response = state
        .service
        .evaluate_decisions(&container_id, &body, format)
        .await;
    envelope(format, &response)
}

fn envelope<T: Serialize>(format: MarshallingFormat, response: &ServiceResponse<T>) -> Result<Response, ServerError> {
    let bytes = format.marshal(response)?;
    Ok(([(CONTENT_TYPE, format.content_type())], bytes).into_response())
}
