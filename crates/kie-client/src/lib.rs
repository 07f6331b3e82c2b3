//! KIE DMN client
//!
//! Remote evaluation of DMN decisions hosted in KIE server containers.

pub mod client;
pub mod coercion;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;

pub use client::DmnServicesClient;
pub use coercion::{coerce_context, coerce_result, coerce_value};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use http::HttpTransport;
pub use transport::{HttpMethod, Transport, TransportRequest};
