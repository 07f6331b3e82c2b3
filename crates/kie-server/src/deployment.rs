//! Containers deployed at startup

use bigdecimal::BigDecimal;
use kie_core::{DmnContext, Value};
use kie_dmn::{ContainerRegistry, LocalContainer, LocalDecision, LocalModel};
use std::collections::HashMap;
use std::sync::Arc;

pub const SAMPLE_CONTAINER_ID: &str = "function-definition";
pub const SAMPLE_NAMESPACE: &str = "https://www.drools.org/kie-dmn/function-definition";
pub const SAMPLE_MODEL_NAME: &str = "function-definition";

fn number(ctx: &DmnContext, name: &str) -> Result<BigDecimal, String> {
    ctx.get(name)
        .and_then(Value::as_decimal)
        .ok_or_else(|| format!("'{}' is not a number", name))
}

/// Model with a single decision `Math = {Sum: a + b}`
pub fn function_definition_model() -> LocalModel {
    LocalModel::new(SAMPLE_NAMESPACE, SAMPLE_MODEL_NAME)
        .with_id("_5a4bdb64-f0ef-4978-9e03-6f1ae64a1f17")
        .with_decision(
            LocalDecision::new("_6fa2a11f-6c40-4f36-a4c1-3f5b7a0bd5d4", "Math", |ctx| {
                let sum = number(ctx, "a")? + number(ctx, "b")?;
                let mut math = HashMap::new();
                math.insert("Sum".to_string(), Value::from(sum));
                Ok(Value::Object(math))
            })
            .requires(&["a", "b"]),
        )
}

/// Registry holding the sample container
pub fn sample_registry() -> ContainerRegistry {
    ContainerRegistry::new().with_container(Arc::new(
        LocalContainer::new(SAMPLE_CONTAINER_ID).with_model(function_definition_model()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_registry() {
        let registry = sample_registry();
        assert_eq!(registry.container_ids(), vec![SAMPLE_CONTAINER_ID.to_string()]);
    }

    #[test]
    fn test_sample_model_shape() {
        let model = function_definition_model();
        assert_eq!(model.model().namespace, SAMPLE_NAMESPACE);
        assert_eq!(model.model().decisions.len(), 1);
        assert_eq!(model.model().decisions[0].name, "Math");
    }
}
