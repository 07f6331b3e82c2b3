//! Service response envelope
//!
//! Success and failure travel in the same shape; callers check `type` before
//! reading `result`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseType {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    #[serde(rename = "type")]
    pub response_type: ResponseType,

    pub msg: String,

    #[serde(default = "Option::default")]
    pub result: Option<T>,
}

impl<T> ServiceResponse<T> {
    pub fn success(msg: impl Into<String>, result: T) -> Self {
        Self {
            response_type: ResponseType::Success,
            msg: msg.into(),
            result: Some(result),
        }
    }

    pub fn failure(msg: impl Into<String>) -> Self {
        Self {
            response_type: ResponseType::Failure,
            msg: msg.into(),
            result: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.response_type == ResponseType::Success
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn result_mut(&mut self) -> Option<&mut T> {
        self.result.as_mut()
    }

    pub fn into_result(self) -> Option<T> {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let response = ServiceResponse::success("OK", 5);
        assert!(response.is_success());
        assert_eq!(response.result(), Some(&5));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "SUCCESS");
        assert_eq!(json["msg"], "OK");
        assert_eq!(json["result"], 5);
    }

    #[test]
    fn test_failure_envelope_has_no_result() {
        let response: ServiceResponse<i32> = ServiceResponse::failure("Error from container 'c1'");
        assert!(!response.is_success());
        assert!(response.result().is_none());

        let json = serde_json::to_string(&response).unwrap();
        let reread: ServiceResponse<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(reread, response);
    }

    #[test]
    fn test_missing_result_field_reads_as_none() {
        let response: ServiceResponse<i32> =
            serde_json::from_str(r#"{"type": "FAILURE", "msg": "boom"}"#).unwrap();
        assert_eq!(response.response_type, ResponseType::Failure);
        assert!(response.into_result().is_none());
    }
}
