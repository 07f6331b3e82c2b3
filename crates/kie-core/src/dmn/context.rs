//! Evaluation context

use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping of input variable names to values for one evaluation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DmnContext {
    entries: HashMap<String, Value>,
}

impl DmnContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an entry, returning the previous value if any
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(name.into(), value.into())
    }

    /// Builder-style `set`
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get_all(&self) -> &HashMap<String, Value> {
        &self.entries
    }

    pub fn get_all_mut(&mut self) -> &mut HashMap<String, Value> {
        &mut self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    pub fn into_inner(self) -> HashMap<String, Value> {
        self.entries
    }
}

impl From<HashMap<String, Value>> for DmnContext {
    fn from(entries: HashMap<String, Value>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, Value)> for DmnContext {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
