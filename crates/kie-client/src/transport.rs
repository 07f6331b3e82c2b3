//! Transport abstraction
//!
//! The client talks to a server through one request/response exchange per
//! call. `HttpTransport` is the REST binding; tests and embedded setups can
//! plug their own.

use crate::error::Result;
use async_trait::async_trait;
use kie_core::MarshallingFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// One exchange with the DMN resource of a container
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub container_id: String,
    pub body: Option<Vec<u8>>,
    pub format: MarshallingFormat,
}

impl TransportRequest {
    /// Model listing request
    pub fn get(container_id: impl Into<String>, format: MarshallingFormat) -> Self {
        Self {
            method: HttpMethod::Get,
            container_id: container_id.into(),
            body: None,
            format,
        }
    }

    /// Evaluation request carrying a marshalled payload
    pub fn post(container_id: impl Into<String>, body: Vec<u8>, format: MarshallingFormat) -> Self {
        Self {
            method: HttpMethod::Post,
            container_id: container_id.into(),
            body: Some(body),
            format,
        }
    }
}

/// Delivers a request and returns the raw response body
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<Vec<u8>>;
}
