//! Shared fixtures: an in-process server behind the `Transport` trait

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use kie_client::{HttpMethod, Transport, TransportRequest};
use kie_core::{MarshallingFormat, Value};
use kie_dmn::{ContainerRegistry, LocalContainer, LocalDecision, LocalModel, ModelEvaluatorService};
use std::collections::HashMap;
use std::sync::Arc;

pub const CONTAINER_ID: &str = "function-definition";
pub const NAMESPACE: &str = "https://www.drools.org/kie-dmn/function-definition";

/// Routes requests straight into a `ModelEvaluatorService`
pub struct InProcessTransport {
    service: ModelEvaluatorService,
}

impl InProcessTransport {
    pub fn new(service: ModelEvaluatorService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Transport for InProcessTransport {
    async fn send(&self, request: TransportRequest) -> kie_client::Result<Vec<u8>> {
        let bytes = match request.method {
            HttpMethod::Get => {
                let response = self.service.get_models(&request.container_id).await;
                request.format.marshal(&response)
            }
            HttpMethod::Post => {
                let body = request.body.unwrap_or_default();
                let response = self
                    .service
                    .evaluate_decisions(&request.container_id, &body, request.format)
                    .await;
                request.format.marshal(&response)
            }
        };
        bytes.map_err(|e| kie_client::ClientError::Transport(e.to_string()))
    }
}

fn number(ctx: &kie_core::DmnContext, name: &str) -> Result<BigDecimal, String> {
    ctx.get(name)
        .and_then(Value::as_decimal)
        .ok_or_else(|| format!("{} is not a number", name))
}

/// Model with a single decision `Math = {Sum: a + b}`
pub fn math_model() -> LocalModel {
    LocalModel::new(NAMESPACE, "function-definition").with_decision(
        LocalDecision::new("_math", "Math", |ctx| {
            let sum = number(ctx, "a")? + number(ctx, "b")?;
            let mut math = HashMap::new();
            math.insert("Sum".to_string(), Value::from(sum));
            Ok(Value::Object(math))
        })
        .requires(&["a", "b"]),
    )
}

pub fn other_model() -> LocalModel {
    LocalModel::new("https://kie.org/dmn/other", "other")
        .with_decision(LocalDecision::new("_one", "One", |_| Ok(Value::from(1))))
}

pub fn transport(container: LocalContainer) -> Arc<InProcessTransport> {
    let registry = ContainerRegistry::new().with_container(Arc::new(container));
    Arc::new(InProcessTransport::new(ModelEvaluatorService::new(Arc::new(registry))))
}

#[allow(dead_code)]
pub fn formats() -> [MarshallingFormat; 2] {
    [MarshallingFormat::Json, MarshallingFormat::MsgPack]
}
