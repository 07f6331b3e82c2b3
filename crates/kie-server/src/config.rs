//! Server configuration

use kie_core::MarshallingFormat;
use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Log level for the server crates, overridden by `RUST_LOG`
    pub log_level: String,

    /// Format assumed when a request carries no usable content type
    pub default_format: MarshallingFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            default_format: MarshallingFormat::Json,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();
        Self::load_from("config/server")
    }

    /// Load from the given config file (any extension the config crate knows),
    /// with `KIE_`-prefixed environment variables on top
    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("KIE"))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to read config: {}", e))?;

        cfg.try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }

    /// Socket address to bind
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default tracing filter directives
    pub fn log_filter(&self) -> String {
        format!(
            "kie_server={level},kie_dmn={level},kie_client={level},tower_http=debug",
            level = self.log_level
        )
    }
}
