//! Body format negotiation

use super::types::AppState;
use crate::error::ServerError;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        request::Parts,
    },
};
use kie_core::MarshallingFormat;

/// Marshalling format of the exchange.
///
/// Taken from `Content-Type` when present (an unknown type is rejected with
/// 415), otherwise from `Accept`, otherwise the configured default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegotiatedFormat(pub MarshallingFormat);

#[axum::async_trait]
impl<S> FromRequestParts<S> for NegotiatedFormat
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(value) = parts.headers.get(CONTENT_TYPE) {
            let content_type = value
                .to_str()
                .map_err(|_| ServerError::InvalidRequest("Content-Type is not valid text".to_string()))?;
            return MarshallingFormat::from_content_type(content_type)
                .map(Self)
                .ok_or_else(|| ServerError::UnsupportedMediaType(content_type.to_string()));
        }

        let accepted = parts
            .headers
            .get(ACCEPT)
            .and_then(|v| v.to_str().ok())
            .and_then(|accept| accept.split(',').find_map(MarshallingFormat::from_content_type));

        Ok(Self(accepted.unwrap_or(AppState::from_ref(state).default_format)))
    }
}
