//! Evaluation error types

use thiserror::Error;

/// Faults raised while serving a request.
///
/// None of these reach the transport: the service turns every one of them
/// into a FAILURE response.
#[derive(Error, Debug)]
pub enum EvaluationError {
    #[error("Container '{0}' is not deployed")]
    ContainerNotFound(String),

    #[error("Unable to deserialize payload: {0}")]
    Deserialization(String),

    #[error("More than one (default) model: {count} models deployed, a model name is required")]
    AmbiguousModel { count: usize },

    #[error("Unable to locate DMN Model to evaluate: {0}")]
    ModelNotFound(String),

    #[error("Unable to locate DMN Decision to evaluate: decision names and decision ids cannot be combined")]
    UnsupportedSelector,

    #[error("Engine error: {0}")]
    Engine(String),
}

impl From<kie_core::CoreError> for EvaluationError {
    fn from(err: kie_core::CoreError) -> Self {
        EvaluationError::Deserialization(err.to_string())
    }
}

/// Result type for evaluation operations
pub type Result<T> = std::result::Result<T, EvaluationError>;
