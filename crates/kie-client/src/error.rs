//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Error, Debug)]
pub enum ClientError {
    /// Rejected before any request is sent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Request could not be delivered or the server answered with an error status
    #[error("Transport error: {0}")]
    Transport(String),

    /// Request or response could not be (de)serialized
    #[error("Marshalling error: {0}")]
    Marshalling(String),

    /// A numeric result could not be turned into a decimal
    #[error("Coercion error: {0}")]
    Coercion(String),
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
