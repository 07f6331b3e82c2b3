//! DMN services client
//!
//! Builds evaluation requests, ships them through a `Transport` and decodes
//! the service envelope. When the configured format loses numeric types the
//! result goes through the coercion pass before it is handed back.

use crate::coercion::coerce_result;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::http::HttpTransport;
use crate::transport::{Transport, TransportRequest};
use kie_core::{
    DmnContext, DmnContextKs, DmnModelInfoList, DmnResultKs, MarshallingFormat, ServiceResponse,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Remote DMN evaluation against containers of a KIE server
pub struct DmnServicesClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl DmnServicesClient {
    pub fn new(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Client over the REST transport described by `config`
    pub fn http(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn format(&self) -> MarshallingFormat {
        self.config.marshalling_format
    }

    /// Empty evaluation context
    pub fn new_context(&self) -> DmnContext {
        DmnContext::new()
    }

    /// Evaluate every decision of the container's only model
    pub async fn evaluate_all(
        &self,
        container_id: &str,
        context: DmnContext,
    ) -> Result<ServiceResponse<DmnResultKs>> {
        self.evaluate_all_in(container_id, None, None, context).await
    }

    /// Evaluate every decision of the given model
    pub async fn evaluate_all_in(
        &self,
        container_id: &str,
        namespace: Option<&str>,
        model_name: Option<&str>,
        context: DmnContext,
    ) -> Result<ServiceResponse<DmnResultKs>> {
        let request = DmnContextKs::new(owned(namespace), owned(model_name), context);
        self.evaluate_decisions(container_id, request).await
    }

    pub async fn evaluate_decision_by_name(
        &self,
        container_id: &str,
        namespace: Option<&str>,
        model_name: Option<&str>,
        decision_name: &str,
        context: DmnContext,
    ) -> Result<ServiceResponse<DmnResultKs>> {
        let decision_name = required("decision name", decision_name)?;
        let request = DmnContextKs::new(owned(namespace), owned(model_name), context)
            .with_decision_names(vec![decision_name]);
        self.evaluate_decisions(container_id, request).await
    }

    pub async fn evaluate_decision_by_id(
        &self,
        container_id: &str,
        namespace: Option<&str>,
        model_name: Option<&str>,
        decision_id: &str,
        context: DmnContext,
    ) -> Result<ServiceResponse<DmnResultKs>> {
        let decision_id = required("decision id", decision_id)?;
        let request = DmnContextKs::new(owned(namespace), owned(model_name), context)
            .with_decision_ids(vec![decision_id]);
        self.evaluate_decisions(container_id, request).await
    }

    /// Send a prepared request and decode the envelope
    pub async fn evaluate_decisions(
        &self,
        container_id: &str,
        request: DmnContextKs,
    ) -> Result<ServiceResponse<DmnResultKs>> {
        let format = self.format();
        let body = format
            .marshal(&request)
            .map_err(|e| ClientError::Marshalling(e.to_string()))?;

        debug!("Evaluating decisions on container '{}' ({} bytes)", container_id, body.len());
        let bytes = self
            .transport
            .send(TransportRequest::post(container_id, body, format))
            .await?;

        let mut response: ServiceResponse<DmnResultKs> = format
            .unmarshal(&bytes)
            .map_err(|e| ClientError::Marshalling(e.to_string()))?;

        if !response.is_success() {
            warn!("Evaluation failed on container '{}': {}", container_id, response.msg);
        }

        if format.is_number_ambiguous() {
            if let Some(result) = response.result_mut() {
                coerce_result(result)?;
            }
        }

        Ok(response)
    }

    /// List the models deployed in a container
    pub async fn get_models(&self, container_id: &str) -> Result<ServiceResponse<DmnModelInfoList>> {
        let format = self.format();
        let bytes = self
            .transport
            .send(TransportRequest::get(container_id, format))
            .await?;

        format
            .unmarshal(&bytes)
            .map_err(|e| ClientError::Marshalling(e.to_string()))
    }
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

fn required(what: &str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(ClientError::InvalidArgument(format!("{} cannot be empty", what)));
    }
    Ok(value.to_string())
}
