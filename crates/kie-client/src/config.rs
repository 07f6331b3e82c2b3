//! Client configuration

use kie_core::MarshallingFormat;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection settings for a KIE server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Server base URL, e.g. "http://localhost:8080/services/rest/server"
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Format used for request and response bodies
    #[serde(default)]
    pub marshalling_format: MarshallingFormat,

    /// Timeout for a single request in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            marshalling_format: MarshallingFormat::default(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: MarshallingFormat) -> Self {
        self.marshalling_format = format;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.request_timeout_ms = timeout_ms;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Base URL without trailing slashes
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
