//! Container registry

use crate::engine::KieContainer;
use crate::error::{EvaluationError, Result};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::info;

/// Containers deployed on this server, keyed by container id
#[derive(Default)]
pub struct ContainerRegistry {
    containers: RwLock<HashMap<String, Arc<dyn KieContainer>>>,
}

impl ContainerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deploy a container, replacing any container with the same id
    pub fn register(&self, container: Arc<dyn KieContainer>) {
        let id = container.id().to_string();
        info!("Registering container '{}'", id);
        self.write().insert(id, container);
    }

    /// Builder-style `register`
    pub fn with_container(self, container: Arc<dyn KieContainer>) -> Self {
        self.register(container);
        self
    }

    pub fn unregister(&self, container_id: &str) -> Option<Arc<dyn KieContainer>> {
        info!("Disposing container '{}'", container_id);
        self.write().remove(container_id)
    }

    pub fn get(&self, container_id: &str) -> Result<Arc<dyn KieContainer>> {
        self.read()
            .get(container_id)
            .cloned()
            .ok_or_else(|| EvaluationError::ContainerNotFound(container_id.to_string()))
    }

    pub fn container_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, Arc<dyn KieContainer>>> {
        // a poisoned map is still consistent: writers only insert or remove
        self.containers.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, Arc<dyn KieContainer>>> {
        self.containers.write().unwrap_or_else(|e| e.into_inner())
    }
}
