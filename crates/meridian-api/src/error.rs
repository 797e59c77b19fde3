//! # API Error Type
//!
//! Failure taxonomy for backend calls, and the rule for turning one into
//! the human-readable string a resource store records.
//!
//! ## Message Extraction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Backend rejects a call:                                               │
//! │                                                                         │
//! │  HTTP 409                                                              │
//! │  { "message": "SKU 'KB-01' already exists" }                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError::Http { status: 409, message: Some("SKU 'KB-01' …") }        │
//! │       │                                                                 │
//! │       ▼ user_message("Failed to create product")                       │
//! │  "SKU 'KB-01' already exists"          ◄── backend message wins        │
//! │                                                                         │
//! │  Network unreachable / body not JSON:                                  │
//! │  "Failed to create product"            ◄── per-operation fallback      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Errors from one backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("backend returned {status}{}", format_message(.message))]
    Http { status: u16, message: Option<String> },

    /// The request never completed (DNS, connect, timeout at the OS level).
    #[error("request failed: {0}")]
    Network(String),

    /// The response body did not match the expected payload shape.
    #[error("response decoding failed: {0}")]
    Decode(String),

    /// The configured base URL cannot be used to build requests.
    #[error("invalid endpoint configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience type alias for Results with ApiError.
pub type ApiResult<T> = Result<T, ApiError>;

/// Renders the optional backend message as a `: message` suffix.
fn format_message(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(": {message}"),
        None => String::new(),
    }
}

/// Error body the backend sends on rejections. Extra fields ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct BackendErrorBody {
    pub message: Option<String>,
}

impl ApiError {
    /// Builds the HTTP variant from a status code and raw error body,
    /// extracting the backend's `message` field when the body is the
    /// conventional JSON error payload.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<BackendErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .filter(|m| !m.is_empty());
        ApiError::Http { status, message }
    }

    /// The string a store action records: the backend's own message when
    /// there is one, otherwise the per-operation fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Whether the backend rejected the caller's credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401 | 403, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_extracted() {
        let err = ApiError::from_response(409, r#"{"message":"SKU 'KB-01' already exists"}"#);
        match &err {
            ApiError::Http { status, message } => {
                assert_eq!(*status, 409);
                assert_eq!(message.as_deref(), Some("SKU 'KB-01' already exists"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert_eq!(
            err.user_message("Failed to create product"),
            "SKU 'KB-01' already exists"
        );
    }

    #[test]
    fn test_non_json_body_falls_back() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(
            err.user_message("Failed to fetch products"),
            "Failed to fetch products"
        );
    }

    #[test]
    fn test_empty_message_falls_back() {
        let err = ApiError::from_response(500, r#"{"message":""}"#);
        assert_eq!(err.user_message("Failed to fetch"), "Failed to fetch");
    }

    #[test]
    fn test_network_error_uses_fallback() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.user_message("Failed to fetch stores"), "Failed to fetch stores");
    }

    #[test]
    fn test_unauthorized_detection() {
        assert!(ApiError::from_response(401, "{}").is_unauthorized());
        assert!(ApiError::from_response(403, "{}").is_unauthorized());
        assert!(!ApiError::from_response(404, "{}").is_unauthorized());
    }

    #[test]
    fn test_display_includes_status_and_message() {
        let err = ApiError::from_response(404, r#"{"message":"Product not found"}"#);
        assert_eq!(err.to_string(), "backend returned 404: Product not found");
        let bare = ApiError::from_response(500, "");
        assert_eq!(bare.to_string(), "backend returned 500");
    }
}
