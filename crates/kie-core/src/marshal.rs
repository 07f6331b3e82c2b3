//! Wire formats
//!
//! JSON is number-ambiguous: integers, floats and decimals all come back as
//! plain numbers. MessagePack carries the tagged value form and keeps every
//! numeric variant.

use crate::error::{CoreError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarshallingFormat {
    #[default]
    Json,
    MsgPack,
}

impl MarshallingFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            MarshallingFormat::Json => "application/json",
            MarshallingFormat::MsgPack => "application/msgpack",
        }
    }

    /// Resolve a `Content-Type` header value, ignoring parameters such as charset
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "application/json" => Some(MarshallingFormat::Json),
            "application/msgpack" | "application/x-msgpack" => Some(MarshallingFormat::MsgPack),
            _ => None,
        }
    }

    /// Whether decoded numbers lose their type and need coercion
    pub fn is_number_ambiguous(&self) -> bool {
        matches!(self, MarshallingFormat::Json)
    }

    pub fn marshal<T: Serialize>(&self, value: &T) -> Result<Vec<u8>> {
        match self {
            MarshallingFormat::Json => {
                serde_json::to_vec(value).map_err(|e| CoreError::Marshalling(e.to_string()))
            }
            MarshallingFormat::MsgPack => {
                rmp_serde::to_vec_named(value).map_err(|e| CoreError::Marshalling(e.to_string()))
            }
        }
    }

    pub fn unmarshal<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        match self {
            MarshallingFormat::Json => {
                serde_json::from_slice(bytes).map_err(|e| CoreError::Marshalling(e.to_string()))
            }
            MarshallingFormat::MsgPack => {
                rmp_serde::from_slice(bytes).map_err(|e| CoreError::Marshalling(e.to_string()))
            }
        }
    }
}

impl fmt::Display for MarshallingFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarshallingFormat::Json => f.write_str("json"),
            MarshallingFormat::MsgPack => f.write_str("msgpack"),
        }
    }
}

impl FromStr for MarshallingFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(MarshallingFormat::Json),
            "msgpack" => Ok(MarshallingFormat::MsgPack),
            other => Err(CoreError::Marshalling(format!("unknown marshalling format '{}'", other))),
        }
    }
}
