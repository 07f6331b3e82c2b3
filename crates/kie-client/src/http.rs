//! REST transport

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::transport::{HttpMethod, Transport, TransportRequest};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};
use tracing::debug;

/// Transport over the server's REST resource `{base_url}/containers/{id}/dmn`
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = Url::parse(config.base_url()).map_err(|e| {
            ClientError::InvalidArgument(format!("base URL '{}': {}", config.base_url(), e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidArgument(format!(
                "base URL '{}' cannot carry a path",
                base_url
            )));
        }

        Ok(Self { client, base_url })
    }

    /// Resource URL for a container; the id is percent-encoded as one path segment
    fn url(&self, container_id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["containers", container_id, "dmn"]);
        }
        url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<Vec<u8>> {
        let url = self.url(&request.container_id);
        let content_type = request.format.content_type();
        debug!("{:?} {} ({})", request.method, url, content_type);

        let builder = match request.method {
            HttpMethod::Get => self.client.get(url.clone()),
            HttpMethod::Post => self
                .client
                .post(url.clone())
                .header(CONTENT_TYPE, content_type)
                .body(request.body.unwrap_or_default()),
        };

        let response = builder
            .header(ACCEPT, content_type)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("Failed to reach {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(ClientError::Transport(format!(
                "Server returned error status {} for {}",
                response.status(),
                url
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(format!("Failed to read response body: {}", e)))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_layout() {
        let transport = HttpTransport::new(&ClientConfig::new("http://kie:8080/server/")).unwrap();
        assert_eq!(
            transport.url("function-definition").as_str(),
            "http://kie:8080/server/containers/function-definition/dmn"
        );

        let root = HttpTransport::new(&ClientConfig::new("http://kie:8080")).unwrap();
        assert_eq!(root.url("c1").as_str(), "http://kie:8080/containers/c1/dmn");
    }

    #[test]
    fn test_container_id_is_one_encoded_segment() {
        let transport = HttpTransport::new(&ClientConfig::new("http://kie:8080/server")).unwrap();
        assert_eq!(
            transport.url("a b/c?d").as_str(),
            "http://kie:8080/server/containers/a%20b%2Fc%3Fd/dmn"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = HttpTransport::new(&ClientConfig::new("not a url")).err().unwrap();
        assert!(matches!(err, ClientError::InvalidArgument(_)));
    }
}
