//! KIE DMN Server
//!
//! Serves DMN evaluation for the deployed containers over REST.

use anyhow::Result;
use kie_dmn::ModelEvaluatorService;
use kie_server::{api, config::ServerConfig, deployment};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Initialize tracing
    init_tracing(&config)?;
    info!("Loaded configuration: {:?}", config);

    // Deploy containers
    let registry = Arc::new(deployment::sample_registry());
    info!("Deployed containers: {:?}", registry.container_ids());

    let service = Arc::new(ModelEvaluatorService::new(registry));
    let app = api::create_router(service, config.default_format);

    // Start server
    let addr = config.addr();
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  DMN resource: http://{}/containers/{{container_id}}/dmn", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(config: &ServerConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
