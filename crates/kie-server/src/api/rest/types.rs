//! Request/response type definitions

use kie_core::MarshallingFormat;
use kie_dmn::ModelEvaluatorService;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ModelEvaluatorService>,

    /// Format used when a request does not name one
    pub default_format: MarshallingFormat,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub containers: Vec<String>,
}
