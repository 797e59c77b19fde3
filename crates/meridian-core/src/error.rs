//! # Error Types
//!
//! Domain-specific error types for meridian-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  meridian-core errors (this file)                                      │
//! │  └── CoreError        - Validation failures, capability violations     │
//! │                                                                         │
//! │  meridian-api errors (separate crate)                                  │
//! │  └── ApiError         - HTTP / decode / backend-rejection failures     │
//! │                                                                         │
//! │  Tauri command errors (in app)                                         │
//! │  └── CommandError     - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: CoreError ─┐                                                    │
//! │                   ├──► CommandError ──► Frontend                       │
//! │       ApiError  ──┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Validation failures carry the full field → message map so forms can
//!    render them inline
//! 3. Errors are enum variants, never bare Strings

use thiserror::Error;

use crate::roles::{ActiveView, Role};
use crate::validation::FieldErrors;

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors raised before any network traffic happens.
#[derive(Debug, Error)]
pub enum CoreError {
    /// One or more form fields failed validation.
    ///
    /// The map key is the field name (`"unitPrice"`, `"item_quantity_0"`)
    /// and the value is the human-readable message to render next to it.
    /// A payload that produces this error is never sent to the backend.
    #[error("{}", summarize_field_errors(.0))]
    Validation(FieldErrors),

    /// The current role's capability table does not include the view.
    #[error("{role} may not access the {} view", .view.label())]
    ViewNotAllowed { role: Role, view: ActiveView },
}

impl CoreError {
    /// Returns the field error map when this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CoreError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Renders a field-error map as a single display line, first field first.
fn summarize_field_errors(errors: &FieldErrors) -> String {
    match errors.iter().next() {
        Some((_, message)) if errors.len() == 1 => message.clone(),
        Some((_, message)) => format!("{} (+{} more)", message, errors.len() - 1),
        None => "validation failed".to_string(),
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_single_validation_error_message() {
        let mut errors: FieldErrors = BTreeMap::new();
        errors.insert("unitPrice".to_string(), "Price must be greater than zero.".to_string());
        let err = CoreError::Validation(errors);
        assert_eq!(err.to_string(), "Price must be greater than zero.");
    }

    #[test]
    fn test_multiple_validation_errors_summarized() {
        let mut errors: FieldErrors = BTreeMap::new();
        errors.insert("name".to_string(), "Product name is required.".to_string());
        errors.insert("sku".to_string(), "SKU is required.".to_string());
        let err = CoreError::Validation(errors);
        assert_eq!(err.to_string(), "Product name is required. (+1 more)");
    }

    #[test]
    fn test_view_not_allowed_message() {
        let err = CoreError::ViewNotAllowed {
            role: Role::SupplyChainCoordinator,
            view: ActiveView::Categories,
        };
        assert_eq!(
            err.to_string(),
            "ROLE_SUPPLY_CHAIN_COORDINATOR may not access the Categories view"
        );
    }
}
