//! In-process engine binding
//!
//! Decision nodes are native functions over the evaluation context, each
//! declaring the inputs it requires. Decisions run in the order requested
//! (model order for `evaluate_all`) and every result is written back into the
//! context under the decision name, so later decisions can read earlier ones.
//! A decision that was skipped or failed leaves `null` in the context, and
//! decisions requiring it are skipped in turn.

use crate::engine::{DecisionNode, DmnModel, DmnRuntime, KieContainer};
use crate::error::{EvaluationError, Result};
use async_trait::async_trait;
use kie_core::{
    DecisionEvaluationStatus, DmnContext, DmnDecisionResult, DmnMessage, DmnMessageType,
    DmnResult, MessageSeverity, Value,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Native decision function
pub type DecisionLogic = Arc<dyn Fn(&DmnContext) -> std::result::Result<Value, String> + Send + Sync>;

/// Decision node backed by a native function
#[derive(Clone)]
pub struct LocalDecision {
    node: DecisionNode,
    requires: Vec<String>,
    logic: DecisionLogic,
}

impl LocalDecision {
    pub fn new<F>(id: impl Into<String>, name: impl Into<String>, logic: F) -> Self
    where
        F: Fn(&DmnContext) -> std::result::Result<Value, String> + Send + Sync + 'static,
    {
        Self {
            node: DecisionNode {
                id: id.into(),
                name: name.into(),
            },
            requires: Vec::new(),
            logic: Arc::new(logic),
        }
    }

    /// Declare inputs (or earlier decisions) that must be present in the context
    pub fn requires(mut self, names: &[&str]) -> Self {
        self.requires.extend(names.iter().map(|n| n.to_string()));
        self
    }

    pub fn node(&self) -> &DecisionNode {
        &self.node
    }
}

/// Model made of native decisions
#[derive(Clone)]
pub struct LocalModel {
    model: Arc<DmnModel>,
    decisions: Vec<LocalDecision>,
}

impl LocalModel {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            model: Arc::new(DmnModel {
                namespace: namespace.into(),
                id: format!("_{}", name),
                name,
                decisions: Vec::new(),
            }),
            decisions: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.model).id = id.into();
        self
    }

    pub fn with_decision(mut self, decision: LocalDecision) -> Self {
        Arc::make_mut(&mut self.model).decisions.push(decision.node.clone());
        self.decisions.push(decision);
        self
    }

    pub fn model(&self) -> &Arc<DmnModel> {
        &self.model
    }

    fn matches(&self, model: &DmnModel) -> bool {
        self.model.namespace == model.namespace && self.model.name == model.name
    }

    fn decision(&self, selector: &Lookup<'_>) -> Option<&LocalDecision> {
        self.decisions.iter().find(|d| match selector {
            Lookup::Name(name) => d.node.name == *name,
            Lookup::Id(id) => d.node.id == *id,
        })
    }
}

/// Container deployed in this process
pub struct LocalContainer {
    id: String,
    models: Vec<LocalModel>,
    open_sessions: Arc<AtomicUsize>,
}

impl LocalContainer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            models: Vec::new(),
            open_sessions: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_model(mut self, model: LocalModel) -> Self {
        self.models.push(model);
        self
    }

    /// Sessions handed out and not yet disposed
    pub fn open_sessions(&self) -> usize {
        self.open_sessions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KieContainer for LocalContainer {
    fn id(&self) -> &str {
        &self.id
    }

    async fn new_session(&self) -> Result<Box<dyn DmnRuntime>> {
        self.open_sessions.fetch_add(1, Ordering::SeqCst);
        debug!("Opened session on container '{}'", self.id);
        Ok(Box::new(LocalSession {
            container_id: self.id.clone(),
            models: self.models.clone(),
            open_sessions: Arc::clone(&self.open_sessions),
        }))
    }
}

enum Lookup<'a> {
    Name(&'a str),
    Id(&'a str),
}

struct LocalSession {
    container_id: String,
    models: Vec<LocalModel>,
    open_sessions: Arc<AtomicUsize>,
}

impl LocalSession {
    fn local_model(&self, model: &DmnModel) -> Result<&LocalModel> {
        self.models.iter().find(|m| m.matches(model)).ok_or_else(|| {
            EvaluationError::Engine(format!(
                "model '{}' in namespace '{}' is not deployed in container '{}'",
                model.name, model.namespace, self.container_id
            ))
        })
    }

    fn evaluate(&self, model: &DmnModel, context: &DmnContext, lookups: &[Lookup<'_>]) -> Result<DmnResult> {
        let local = self.local_model(model)?;
        let mut result = DmnResult {
            context: context.clone(),
            ..DmnResult::default()
        };
        let mut unavailable = HashSet::new();

        for lookup in lookups {
            match local.decision(lookup) {
                Some(decision) => {
                    let status = evaluate_decision(decision, &mut result, &unavailable);
                    if status != DecisionEvaluationStatus::Succeeded {
                        unavailable.insert(decision.node.name.clone());
                    }
                }
                None => {
                    let text = match lookup {
                        Lookup::Name(name) => format!("Decision '{}' not found in model '{}'", name, model.name),
                        Lookup::Id(id) => format!("Decision with id '{}' not found in model '{}'", id, model.name),
                    };
                    result.messages.push(DmnMessage::new(
                        MessageSeverity::Error,
                        DmnMessageType::DecisionNotFound,
                        text,
                    ));
                }
            }
        }

        Ok(result)
    }
}

/// Run one decision; `unavailable` names decisions that produced no value.
fn evaluate_decision(
    decision: &LocalDecision,
    result: &mut DmnResult,
    unavailable: &HashSet<String>,
) -> DecisionEvaluationStatus {
    let node = &decision.node;
    let missing: Vec<&String> = decision
        .requires
        .iter()
        .filter(|name| !result.context.contains(name) || unavailable.contains(*name))
        .collect();

    let (value, status) = if !missing.is_empty() {
        for name in missing {
            result.messages.push(
                DmnMessage::new(
                    MessageSeverity::Error,
                    DmnMessageType::ReqNotFound,
                    format!("Required dependency '{}' not found on node '{}'", name, node.name),
                )
                .with_source(node.id.clone()),
            );
        }
        (Value::Null, DecisionEvaluationStatus::Skipped)
    } else {
        match (decision.logic)(&result.context) {
            Ok(value) => (value, DecisionEvaluationStatus::Succeeded),
            Err(text) => {
                result.messages.push(
                    DmnMessage::new(
                        MessageSeverity::Error,
                        DmnMessageType::ErrorEvalNode,
                        format!("Error evaluating node '{}': {}", node.name, text),
                    )
                    .with_source(node.id.clone()),
                );
                (Value::Null, DecisionEvaluationStatus::Failed)
            }
        }
    };

    result.context.set(node.name.clone(), value.clone());
    result.decision_results.push(DmnDecisionResult {
        decision_id: node.id.clone(),
        decision_name: node.name.clone(),
        result: value,
        status,
    });
    status
}

#[async_trait]
impl DmnRuntime for LocalSession {
    fn models(&self) -> Vec<Arc<DmnModel>> {
        self.models.iter().map(|m| Arc::clone(&m.model)).collect()
    }

    fn model(&self, namespace: Option<&str>, name: &str) -> Option<Arc<DmnModel>> {
        self.models
            .iter()
            .map(|m| &m.model)
            .find(|m| m.name == name && namespace.map_or(true, |ns| m.namespace == ns))
            .cloned()
    }

    async fn evaluate_all(&self, model: &DmnModel, context: &DmnContext) -> Result<DmnResult> {
        let local = self.local_model(model)?;
        let lookups: Vec<Lookup<'_>> = local
            .decisions
            .iter()
            .map(|d| Lookup::Id(d.node.id.as_str()))
            .collect();
        self.evaluate(model, context, &lookups)
    }

    async fn evaluate_by_name(
        &self,
        model: &DmnModel,
        context: &DmnContext,
        names: &[String],
    ) -> Result<DmnResult> {
        let lookups: Vec<Lookup<'_>> = names.iter().map(|n| Lookup::Name(n.as_str())).collect();
        self.evaluate(model, context, &lookups)
    }

    async fn evaluate_by_id(
        &self,
        model: &DmnModel,
        context: &DmnContext,
        ids: &[String],
    ) -> Result<DmnResult> {
        let lookups: Vec<Lookup<'_>> = ids.iter().map(|i| Lookup::Id(i.as_str())).collect();
        self.evaluate(model, context, &lookups)
    }
}

impl Drop for LocalSession {
    fn drop(&mut self) {
        self.open_sessions.fetch_sub(1, Ordering::SeqCst);
        debug!("Disposed session on container '{}'", self.container_id);
    }
}
