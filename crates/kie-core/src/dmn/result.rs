//! Evaluation results
//!
//! `DmnResult` is what the decision engine hands back; `DmnResultKs` is the
//! packaged form returned to callers, carrying the resolved model identity
//! and the decision names that were requested.

use super::context::DmnContext;
use crate::types::Value;
use serde::{Deserialize, Serialize};

/// Diagnostic classification of an engine message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DmnMessageType {
    /// A required input or decision dependency is missing from the context
    ReqNotFound,
    /// A requested decision does not exist in the model
    DecisionNotFound,
    /// A decision node failed while being evaluated
    ErrorEvalNode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageSeverity {
    Error,
    Warn,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionEvaluationStatus {
    NotEvaluated,
    Succeeded,
    Skipped,
    Failed,
}

/// Message produced by the engine during evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DmnMessage {
    #[serde(rename = "dmn-message-severity")]
    pub severity: MessageSeverity,

    pub message: String,

    pub message_type: DmnMessageType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
}

impl DmnMessage {
    pub fn new(severity: MessageSeverity, message_type: DmnMessageType, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            message_type,
            source_id: None,
        }
    }

    pub fn with_source(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = Some(source_id.into());
        self
    }
}

/// Outcome of a single decision node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DmnDecisionResult {
    pub decision_id: String,

    pub decision_name: String,

    #[serde(default)]
    pub result: Value,

    pub status: DecisionEvaluationStatus,
}

fn find_by_name<'a>(results: &'a [DmnDecisionResult], name: &str) -> Option<&'a DmnDecisionResult> {
    results.iter().find(|dr| dr.decision_name == name)
}

fn find_by_id<'a>(results: &'a [DmnDecisionResult], id: &str) -> Option<&'a DmnDecisionResult> {
    results.iter().find(|dr| dr.decision_id == id)
}

fn any_error(messages: &[DmnMessage]) -> bool {
    messages.iter().any(|m| m.severity == MessageSeverity::Error)
}

/// Result handed back by the decision engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DmnResult {
    #[serde(rename = "dmn-context", default)]
    pub context: DmnContext,

    #[serde(default)]
    pub decision_results: Vec<DmnDecisionResult>,

    #[serde(default)]
    pub messages: Vec<DmnMessage>,
}

impl DmnResult {
    pub fn decision_result_by_name(&self, name: &str) -> Option<&DmnDecisionResult> {
        find_by_name(&self.decision_results, name)
    }

    pub fn decision_result_by_id(&self, id: &str) -> Option<&DmnDecisionResult> {
        find_by_id(&self.decision_results, id)
    }

    pub fn has_errors(&self) -> bool {
        any_error(&self.messages)
    }
}

/// Packaged evaluation result returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DmnResultKs {
    pub model_namespace: String,

    pub model_name: String,

    /// Decision names from the request, echoed as received
    #[serde(rename = "decision-name", default, skip_serializing_if = "Option::is_none")]
    pub decision_names: Option<Vec<String>>,

    #[serde(default)]
    pub dmn_context: DmnContext,

    #[serde(default)]
    pub messages: Vec<DmnMessage>,

    #[serde(default)]
    pub decision_results: Vec<DmnDecisionResult>,
}

impl DmnResultKs {
    pub fn new(
        model_namespace: impl Into<String>,
        model_name: impl Into<String>,
        decision_names: Option<Vec<String>>,
        result: DmnResult,
    ) -> Self {
        let DmnResult {
            context,
            decision_results,
            messages,
        } = result;

        Self {
            model_namespace: model_namespace.into(),
            model_name: model_name.into(),
            decision_names,
            dmn_context: context,
            messages,
            decision_results,
        }
    }

    pub fn context(&self) -> &DmnContext {
        &self.dmn_context
    }

    pub fn decision_result_by_name(&self, name: &str) -> Option<&DmnDecisionResult> {
        find_by_name(&self.decision_results, name)
    }

    pub fn decision_result_by_id(&self, id: &str) -> Option<&DmnDecisionResult> {
        find_by_id(&self.decision_results, id)
    }

    pub fn has_errors(&self) -> bool {
        any_error(&self.messages)
    }

    pub fn messages_of_type(&self, message_type: DmnMessageType) -> impl Iterator<Item = &DmnMessage> {
        self.messages.iter().filter(move |m| m.message_type == message_type)
    }
}
