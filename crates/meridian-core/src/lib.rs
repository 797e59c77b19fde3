//! # meridian-core: Pure Domain Model for the Meridian ERP Client
//!
//! This crate is the **heart** of the Meridian client. It contains the
//! domain types, validation rules, and role/view capability table as pure
//! code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Meridian ERP Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (web view)                          │   │
//! │  │    Login ──► Sidebar ──► Management pages ──► Modals           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    login, fetch_products, create_product, run_forecast, …      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ meridian-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐                 │   │
//! │  │   │   types   │  │   roles   │  │ validation │                 │   │
//! │  │   │  Product  │  │   Role    │  │   rules    │                 │   │
//! │  │   │  Order…   │  │ ActiveView│  │  messages  │                 │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │       meridian-api (REST) / meridian-state (stores)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, PurchaseOrder, SalesOrder, etc.)
//! - [`roles`] - Role enum, view enum, and the capability table
//! - [`validation`] - Form validation rules and messages
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Backend Is Truth**: the client never computes totals, stock
//!    levels, or order-status transitions — those fields only ever come
//!    from backend responses
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod roles;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use meridian_core::Product` instead of
// `use meridian_core::types::Product`

pub use error::{CoreError, CoreResult};
pub use roles::{ActiveView, Role};
pub use types::*;
pub use validation::FieldErrors;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Unselected sentinel for foreign-key dropdowns.
///
/// ## Why a constant?
/// The backend assigns ids starting at 1; form drafts use 0 to mean
/// "nothing selected yet", and validation rejects it before submission.
pub const UNSELECTED_ID: i64 = 0;

/// Default low-stock threshold for the low-stock report when the caller
/// does not supply one.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;
