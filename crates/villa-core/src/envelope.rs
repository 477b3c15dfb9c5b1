//! Uniform response envelope
//!
//! Every endpoint returns exactly one envelope. The status code is carried
//! inside the payload as well as on the transport so that clients inspecting
//! the body alone can distinguish outcomes.

use serde::{Deserialize, Serialize};

/// Success/failure wrapper returned by every operation
///
/// Invariant: exactly one of `result` (success) or a non-empty
/// `error_messages` (failure) is meaningful, and `is_success` matches the
/// populated branch. Construct only through [`ApiResponse::ok`] and
/// [`ApiResponse::failure`] to keep that invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub is_success: bool,
    pub error_messages: Vec<String>,
    pub result: Option<serde_json::Value>,
}

impl ApiResponse {
    /// Successful envelope carrying a serialized result
    pub fn ok(status_code: u16, result: impl Serialize) -> Self {
        ApiResponse {
            status_code,
            is_success: true,
            error_messages: Vec::new(),
            result: serde_json::to_value(result).ok(),
        }
    }

    /// Successful envelope with no payload (update/delete outcomes)
    pub fn ok_empty(status_code: u16) -> Self {
        ApiResponse {
            status_code,
            is_success: true,
            error_messages: Vec::new(),
            result: None,
        }
    }

    /// Failure envelope carrying one or more error messages
    pub fn failure(status_code: u16, error_messages: Vec<String>) -> Self {
        ApiResponse {
            status_code,
            is_success: false,
            error_messages,
            result: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_populates_result_branch() {
        let response = ApiResponse::ok(200, json!({"id": 1}));
        assert!(response.is_success);
        assert_eq!(response.status_code, 200);
        assert!(response.error_messages.is_empty());
        assert_eq!(response.result, Some(json!({"id": 1})));
    }

    #[test]
    fn failure_populates_error_branch() {
        let response = ApiResponse::failure(404, vec!["not found".to_string()]);
        assert!(!response.is_success);
        assert_eq!(response.status_code, 404);
        assert!(response.result.is_none());
        assert_eq!(response.error_messages, vec!["not found".to_string()]);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let response = ApiResponse::ok_empty(204);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["statusCode"], 204);
        assert_eq!(json["isSuccess"], true);
        assert!(json["errorMessages"].as_array().unwrap().is_empty());
    }
}
