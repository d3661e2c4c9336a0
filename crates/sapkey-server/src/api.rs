//! Wire bodies of the retrieval endpoint

use serde::{Deserialize, Serialize};

/// Message sent when the store holds no record
pub const NOT_FOUND_MESSAGE: &str = "SAP key not found";

/// Message sent when the store cannot be queried
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// 200 body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SapKeyResponse {
    pub sap_key: String,
}

/// 404 and 500 bodies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[inline]
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            message: NOT_FOUND_MESSAGE.to_string(),
        }
    }

    #[inline]
    #[must_use]
    pub fn server_error() -> Self {
        Self {
            message: SERVER_ERROR_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sap_key_response_field_name() {
        let body = SapKeyResponse {
            sap_key: "K1".to_string(),
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"sapKey":"K1"}"#);
    }

    #[test]
    fn message_responses() {
        assert_eq!(
            serde_json::to_string(&MessageResponse::not_found()).unwrap(),
            r#"{"message":"SAP key not found"}"#
        );
        assert_eq!(MessageResponse::server_error().message, "Server error");
    }
}
