//! KIE Core - Shared types for the KIE DMN decision service
//!
//! This crate provides the fundamental types used by both the evaluation
//! service and its clients:
//! - Value types for decision inputs and results
//! - DMN request/result payloads and model descriptors
//! - The service response envelope
//! - Wire formats (JSON and MessagePack)
//! - Error types

pub mod dmn;
pub mod error;
pub mod marshal;
pub mod response;
pub mod types;

// Re-export commonly used types
pub use dmn::{
    DecisionEvaluationStatus, DmnContext, DmnContextKs, DmnDecisionInfo, DmnDecisionResult,
    DmnMessage, DmnMessageType, DmnModelInfo, DmnModelInfoList, DmnResult, DmnResultKs,
    MessageSeverity,
};
pub use error::{CoreError, Result};
pub use marshal::MarshallingFormat;
pub use response::{ResponseType, ServiceResponse};
pub use types::{Number, Value};
