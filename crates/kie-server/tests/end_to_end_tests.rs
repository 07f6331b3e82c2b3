//! End-to-end tests over a real socket with the HTTP client

use bigdecimal::BigDecimal;
use kie_client::{ClientConfig, DmnServicesClient};
use kie_core::{DmnMessageType, MarshallingFormat, Value};
use kie_dmn::ModelEvaluatorService;
use kie_server::api::create_router;
use kie_server::deployment::{sample_registry, SAMPLE_CONTAINER_ID, SAMPLE_MODEL_NAME, SAMPLE_NAMESPACE};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Serve the sample deployment on an ephemeral port and return its base URL
async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(
        Arc::new(ModelEvaluatorService::new(Arc::new(sample_registry()))),
        MarshallingFormat::Json,
    );
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_remote_sum() {
    let base_url = spawn_server().await;

    for format in [MarshallingFormat::Json, MarshallingFormat::MsgPack] {
        let client = DmnServicesClient::http(ClientConfig::new(base_url.clone()).with_format(format)).unwrap();
        let context = client.new_context().with("a", 10).with("b", 5);

        let response = client
            .evaluate_decision_by_name(
                SAMPLE_CONTAINER_ID,
                Some(SAMPLE_NAMESPACE),
                Some(SAMPLE_MODEL_NAME),
                "Math",
                context,
            )
            .await
            .unwrap();

        assert!(response.is_success(), "{}", response.msg);
        let result = response.result().unwrap();
        let sum = result
            .decision_result_by_name("Math")
            .and_then(|dr| dr.result.get("Sum"))
            .and_then(Value::as_decimal);
        assert_eq!(sum, Some(BigDecimal::from(15)));
    }
}

#[tokio::test]
async fn test_remote_missing_input() {
    let base_url = spawn_server().await;
    let client = DmnServicesClient::http(ClientConfig::new(base_url)).unwrap();

    let response = client
        .evaluate_all(SAMPLE_CONTAINER_ID, client.new_context().with("a", 10))
        .await
        .unwrap();

    let result = response.result().unwrap();
    assert_eq!(result.context().get("Math"), Some(&Value::Null));
    assert!(result.messages_of_type(DmnMessageType::ReqNotFound).next().is_some());
}

#[tokio::test]
async fn test_remote_models() {
    let base_url = spawn_server().await;
    let client = DmnServicesClient::http(ClientConfig::new(base_url)).unwrap();

    let response = client.get_models(SAMPLE_CONTAINER_ID).await.unwrap();

    let models = response.result().unwrap();
    assert!(models.find(SAMPLE_NAMESPACE, SAMPLE_MODEL_NAME).is_some());
}
