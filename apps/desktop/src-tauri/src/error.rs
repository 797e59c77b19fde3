//! # Command Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Error Flow in the Meridian Client                      │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('create_product')                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, CommandError>                                         │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation failed? ── CoreError::Validation ───┐                │  │
//! │  │         │              (field map, no HTTP)     │                │  │
//! │  │         ▼                                       ▼                │  │
//! │  │  Backend rejected? ─── store error string ── CommandError ─────► │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  try { await invoke('create_product') }                                 │
//! │  catch (e) {                                                            │
//! │    // e.code = "VALIDATION_ERROR"                                       │
//! │    // e.message = "Price must be greater than zero."                    │
//! │    // e.fieldErrors = { "unitPrice": "Price must be …" }                │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tauri requires errors to be serializable; we send both a
//! machine-readable `code` and a human-readable `message`, plus the
//! per-field map when validation fails so modals can render messages
//! inline.

use meridian_core::{CoreError, FieldErrors};
use serde::Serialize;

/// Command error returned from Tauri commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Field → message map, present only for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<FieldErrors>,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No session; the shell must show the login screen
    Unauthorized,

    /// Authenticated, but the role's capability table says no
    Forbidden,

    /// A form draft failed client-side validation
    ValidationError,

    /// The backend (or sidecar) rejected or never answered a request
    RequestFailed,

    /// Internal client error (storage, config)
    Internal,
}

impl CommandError {
    /// Creates a new command error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CommandError {
            code,
            message: message.into(),
            field_errors: None,
        }
    }

    /// No active session.
    pub fn unauthorized() -> Self {
        CommandError::new(ErrorCode::Unauthorized, "Not logged in")
    }

    /// A backend request failed; `message` is the store's error string
    /// (backend message or per-operation fallback).
    pub fn request_failed(message: impl Into<String>) -> Self {
        CommandError::new(ErrorCode::RequestFailed, message)
    }

    /// Internal client failure.
    pub fn internal(message: impl Into<String>) -> Self {
        CommandError::new(ErrorCode::Internal, message)
    }
}

/// Converts domain errors to command errors.
impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(errors) => CommandError {
                code: ErrorCode::ValidationError,
                message: err_message_from_fields(&errors),
                field_errors: Some(errors),
            },
            CoreError::ViewNotAllowed { .. } => CommandError::new(ErrorCode::Forbidden, err.to_string()),
        }
    }
}

/// The store error string is already human-readable; requests surface it
/// unchanged.
impl From<String> for CommandError {
    fn from(message: String) -> Self {
        CommandError::request_failed(message)
    }
}

fn err_message_from_fields(errors: &FieldErrors) -> String {
    errors
        .values()
        .next()
        .cloned()
        .unwrap_or_else(|| "Validation failed".to_string())
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for CommandError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_validation_error_carries_field_map() {
        let mut fields: FieldErrors = BTreeMap::new();
        fields.insert("unitPrice".to_string(), "Price must be greater than zero.".to_string());
        let err: CommandError = CoreError::Validation(fields).into();

        assert!(matches!(err.code, ErrorCode::ValidationError));
        assert_eq!(err.message, "Price must be greater than zero.");
        assert_eq!(
            err.field_errors.unwrap()["unitPrice"],
            "Price must be greater than zero."
        );
    }

    #[test]
    fn test_store_error_string_becomes_request_failed() {
        let err: CommandError = "Failed to fetch products".to_string().into();
        assert!(matches!(err.code, ErrorCode::RequestFailed));
        assert_eq!(err.message, "Failed to fetch products");
    }

    #[test]
    fn test_serialized_shape() {
        let err = CommandError::unauthorized();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "UNAUTHORIZED");
        assert_eq!(json["message"], "Not logged in");
        assert!(json.get("fieldErrors").is_none());
    }
}
