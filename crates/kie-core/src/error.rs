//! Error types for KIE Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Marshalling error: {0}")]
    Marshalling(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
