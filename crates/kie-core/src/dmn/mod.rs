//! DMN payload types shared by the evaluation service and its clients
//!
//! - `context`: evaluation context (input name to value)
//! - `request`: evaluation request with model and decision selectors
//! - `result`: engine result and the packaged service result
//! - `model`: model and decision descriptors returned by model listing

pub mod context;
pub mod model;
pub mod request;
pub mod result;

pub use context::DmnContext;
pub use model::{DmnDecisionInfo, DmnModelInfo, DmnModelInfoList};
pub use request::DmnContextKs;
pub use result::{
    DecisionEvaluationStatus, DmnDecisionResult, DmnMessage, DmnMessageType, DmnResult,
    DmnResultKs, MessageSeverity,
};
