//! API Response types
//!
//! JSON bodies returned by the employee routes:
//!
//! | Route | Body |
//! |-------|------|
//! | GET | `[Employee, ...]` |
//! | POST | `{ "message", "id" }` |
//! | PUT / DELETE | `{ "message" }` |
//! | any error | `{ "message", "error"? }` |

use serde::{Deserialize, Serialize};

/// Plain acknowledgement (`PUT`, `DELETE`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Create acknowledgement carrying the store-assigned id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: String,
}

/// Error body for 4xx/5xx responses
///
/// `error` carries the underlying failure detail and is only present for
/// operation failures (5xx); validation errors send the message alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Client-input error: message only
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    /// Operation failure: message plus underlying detail
    pub fn with_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_omits_missing_detail() {
        let json = serde_json::to_string(&ErrorBody::message("Missing required fields")).unwrap();
        assert_eq!(json, r#"{"message":"Missing required fields"}"#);

        let json =
            serde_json::to_string(&ErrorBody::with_error("Error adding employee", "disk full"))
                .unwrap();
        assert_eq!(json, r#"{"message":"Error adding employee","error":"disk full"}"#);
    }
}
