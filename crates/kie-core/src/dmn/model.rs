//! Model descriptors returned by model listing

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DmnDecisionInfo {
    #[serde(rename = "decision-id")]
    pub id: String,

    #[serde(rename = "decision-name")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DmnModelInfo {
    pub model_namespace: String,

    pub model_name: String,

    pub model_id: String,

    #[serde(default)]
    pub decisions: Vec<DmnDecisionInfo>,
}

/// Models deployed in a container
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DmnModelInfoList {
    #[serde(rename = "model", default)]
    pub models: Vec<DmnModelInfo>,
}

impl DmnModelInfoList {
    pub fn new(models: Vec<DmnModelInfo>) -> Self {
        Self { models }
    }

    pub fn find(&self, namespace: &str, name: &str) -> Option<&DmnModelInfo> {
        self.models
            .iter()
            .find(|m| m.model_namespace == namespace && m.model_name == name)
    }
}
