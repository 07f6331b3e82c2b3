//! Decision engine boundary
//!
//! The engine itself is external. The service only sees a container handing
//! out sessions, and a session exposing model lookup plus three evaluation
//! modes. A session is disposed when it is dropped.

use crate::error::Result;
use async_trait::async_trait;
use kie_core::{DmnContext, DmnDecisionInfo, DmnModelInfo, DmnResult};
use std::sync::Arc;

/// Decision node of a model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionNode {
    pub id: String,
    pub name: String,
}

/// Decision model owned by the engine, identified by (namespace, name)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DmnModel {
    pub namespace: String,
    pub name: String,
    pub id: String,
    pub decisions: Vec<DecisionNode>,
}

impl DmnModel {
    /// Descriptor returned by model listing
    pub fn info(&self) -> DmnModelInfo {
        DmnModelInfo {
            model_namespace: self.namespace.clone(),
            model_name: self.name.clone(),
            model_id: self.id.clone(),
            decisions: self
                .decisions
                .iter()
                .map(|d| DmnDecisionInfo {
                    id: d.id.clone(),
                    name: d.name.clone(),
                })
                .collect(),
        }
    }

    pub fn decision_by_name(&self, name: &str) -> Option<&DecisionNode> {
        self.decisions.iter().find(|d| d.name == name)
    }

    pub fn decision_by_id(&self, id: &str) -> Option<&DecisionNode> {
        self.decisions.iter().find(|d| d.id == id)
    }
}

/// Engine session
#[async_trait]
pub trait DmnRuntime: Send + Sync {
    /// Models available to this session, in deployment order
    fn models(&self) -> Vec<Arc<DmnModel>>;

    /// Look up a model; `None` namespace matches any namespace
    fn model(&self, namespace: Option<&str>, name: &str) -> Option<Arc<DmnModel>>;

    /// Evaluate every decision of the model
    async fn evaluate_all(&self, model: &DmnModel, context: &DmnContext) -> Result<DmnResult>;

    /// Evaluate the named decisions, in the given order
    async fn evaluate_by_name(
        &self,
        model: &DmnModel,
        context: &DmnContext,
        names: &[String],
    ) -> Result<DmnResult>;

    /// Evaluate the decisions with the given ids, in the given order
    async fn evaluate_by_id(
        &self,
        model: &DmnModel,
        context: &DmnContext,
        ids: &[String],
    ) -> Result<DmnResult>;
}

/// Deployed unit handing out engine sessions
#[async_trait]
pub trait KieContainer: Send + Sync {
    fn id(&self) -> &str;

    /// Open a new session; it is disposed when dropped
    async fn new_session(&self) -> Result<Box<dyn DmnRuntime>>;
}
