//! Model evaluation service
//!
//! Serves one request at a time per call with no state kept in between:
//! open a session on the container, decode the request, resolve the model,
//! build the evaluation context, dispatch one evaluation mode and package
//! the engine result. Every fault ends up in a FAILURE response.

use crate::container::ContainerRegistry;
use crate::engine::{DmnModel, DmnRuntime};
use crate::error::{EvaluationError, Result};
use kie_core::{
    DmnContext, DmnContextKs, DmnModelInfoList, DmnResultKs, MarshallingFormat, ServiceResponse,
};
use std::sync::Arc;
use tracing::{debug, error};

/// Which decisions of the model to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionSelector<'a> {
    All,
    ByName(&'a [String]),
    ById(&'a [String]),
}

impl<'a> DecisionSelector<'a> {
    /// Pick the evaluation mode; names and ids together are rejected
    pub fn from_request(request: &'a DmnContextKs) -> Result<Self> {
        let names = request.names();
        let ids = request.ids();

        match (names.is_empty(), ids.is_empty()) {
            (true, true) => Ok(DecisionSelector::All),
            (false, true) => Ok(DecisionSelector::ByName(names)),
            (true, false) => Ok(DecisionSelector::ById(ids)),
            (false, false) => Err(EvaluationError::UnsupportedSelector),
        }
    }
}

/// DMN evaluation service for the containers of a registry
pub struct ModelEvaluatorService {
    registry: Arc<ContainerRegistry>,
}

impl ModelEvaluatorService {
    pub fn new(registry: Arc<ContainerRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<ContainerRegistry> {
        &self.registry
    }

    /// List the models deployed in a container
    pub async fn get_models(&self, container_id: &str) -> ServiceResponse<DmnModelInfoList> {
        match self.list_models(container_id).await {
            Ok(models) => ServiceResponse::success(
                format!("OK models successfully retrieved from container '{}'", container_id),
                models,
            ),
            Err(e) => {
                error!("Error retrieving models from container '{}': {}", container_id, e);
                ServiceResponse::failure(format!(
                    "Error retrieving models from container '{}': {}",
                    container_id, e
                ))
            }
        }
    }

    /// Evaluate decisions for a serialized `DmnContextKs` payload
    pub async fn evaluate_decisions(
        &self,
        container_id: &str,
        payload: &[u8],
        format: MarshallingFormat,
    ) -> ServiceResponse<DmnResultKs> {
        match self.try_evaluate(container_id, payload, format).await {
            Ok(result) => ServiceResponse::success(format!("OK from container '{}'", container_id), result),
            Err(e) => {
                error!("Error from container '{}': {}", container_id, e);
                ServiceResponse::failure(format!("Error from container '{}': {}", container_id, e))
            }
        }
    }

    async fn list_models(&self, container_id: &str) -> Result<DmnModelInfoList> {
        let container = self.registry.get(container_id)?;
        let session = container.new_session().await?;
        let models = session.models().iter().map(|m| m.info()).collect();
        Ok(DmnModelInfoList::new(models))
    }

    async fn try_evaluate(
        &self,
        container_id: &str,
        payload: &[u8],
        format: MarshallingFormat,
    ) -> Result<DmnResultKs> {
        let container = self.registry.get(container_id)?;
        // disposed on every return path
        let session = container.new_session().await?;

        debug!("Will deserialize {} byte {} payload", payload.len(), format);
        let request: DmnContextKs = format.unmarshal(payload)?;

        let model = resolve_model(session.as_ref(), &request)?;
        debug!("Will use model '{}' from namespace '{}'", model.name, model.namespace);

        let mut dmn_context = DmnContext::new();
        for (name, value) in request.dmn_context.iter() {
            dmn_context.set(name.clone(), value.clone());
        }
        debug!("Will use dmn context with {} entries", dmn_context.len());

        let result = match DecisionSelector::from_request(&request)? {
            DecisionSelector::All => {
                debug!("Invoking evaluate_all");
                session.evaluate_all(&model, &dmn_context).await?
            }
            DecisionSelector::ByName(names) => {
                debug!("Invoking evaluate_by_name using {:?}", names);
                session.evaluate_by_name(&model, &dmn_context, names).await?
            }
            DecisionSelector::ById(ids) => {
                debug!("Invoking evaluate_by_id using {:?}", ids);
                session.evaluate_by_id(&model, &dmn_context, ids).await?
            }
        };
        debug!(
            "Evaluated {} decisions with {} messages",
            result.decision_results.len(),
            result.messages.len()
        );

        Ok(DmnResultKs::new(
            model.namespace.clone(),
            model.name.clone(),
            request.decision_names.clone(),
            result,
        ))
    }
}

/// Resolve the target model; without a model name the container must hold exactly one
fn resolve_model(runtime: &dyn DmnRuntime, request: &DmnContextKs) -> Result<Arc<DmnModel>> {
    match request.model_name.as_deref() {
        None => {
            let mut models = runtime.models();
            match models.len() {
                0 => Err(EvaluationError::ModelNotFound("no models deployed".to_string())),
                1 => Ok(models.remove(0)),
                count => Err(EvaluationError::AmbiguousModel { count }),
            }
        }
        Some(name) => runtime
            .model(request.namespace.as_deref(), name)
            .ok_or_else(|| {
                EvaluationError::ModelNotFound(format!(
                    "namespace '{}', name '{}'",
                    request.namespace.as_deref().unwrap_or_default(),
                    name
                ))
            }),
    }
}
