//! Evaluation request payload

use super::context::DmnContext;
use serde::{Deserialize, Serialize};

/// Evaluation request sent to a container.
///
/// `decision_names` and `decision_ids` select what to evaluate; leaving both
/// empty evaluates every decision of the model. Supplying both is rejected by
/// the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DmnContextKs {
    #[serde(rename = "model-namespace", default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,

    #[serde(rename = "decision-name", default, skip_serializing_if = "Option::is_none")]
    pub decision_names: Option<Vec<String>>,

    #[serde(rename = "decision-id", default, skip_serializing_if = "Option::is_none")]
    pub decision_ids: Option<Vec<String>>,

    #[serde(default)]
    pub dmn_context: DmnContext,
}

impl DmnContextKs {
    pub fn new(namespace: Option<String>, model_name: Option<String>, dmn_context: DmnContext) -> Self {
        Self {
            namespace,
            model_name,
            decision_names: None,
            decision_ids: None,
            dmn_context,
        }
    }

    pub fn with_decision_names(mut self, names: Vec<String>) -> Self {
        self.decision_names = Some(names);
        self
    }

    pub fn with_decision_ids(mut self, ids: Vec<String>) -> Self {
        self.decision_ids = Some(ids);
        self
    }

    /// Requested decision names, empty when none were given
    pub fn names(&self) -> &[String] {
        self.decision_names.as_deref().unwrap_or_default()
    }

    /// Requested decision ids, empty when none were given
    pub fn ids(&self) -> &[String] {
        self.decision_ids.as_deref().unwrap_or_default()
    }
}
