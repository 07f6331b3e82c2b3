//! KIE DMN - Decision resolution and evaluation service
//!
//! This crate hosts the server side of the DMN pipeline:
//! - `engine`: the narrow interface to the decision engine (sessions, models, evaluation)
//! - `container`: registry of deployed containers
//! - `local`: in-process engine binding backed by native decision functions
//! - `service`: `ModelEvaluatorService`, which resolves a model and dispatches one evaluation mode

pub mod container;
pub mod engine;
pub mod error;
pub mod local;
pub mod service;

// Re-export main types
pub use container::ContainerRegistry;
pub use engine::{DecisionNode, DmnModel, DmnRuntime, KieContainer};
pub use error::{EvaluationError, Result};
pub use local::{LocalContainer, LocalDecision, LocalModel};
pub use service::{DecisionSelector, ModelEvaluatorService};
