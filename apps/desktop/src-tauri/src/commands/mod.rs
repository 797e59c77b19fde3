//! # Command Modules
//!
//! IPC surface of the desktop app: one module per management page plus
//! auth, navigation, and the dashboard.
//!
//! ## Command Conventions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  fetch_<resource>(force?)   idle-guarded fetch; force=true bypasses     │
//! │                             the guard (user retry / explicit refresh).  │
//! │                             Returns the full store snapshot — pages     │
//! │                             render loading/error/empty/data from it.    │
//! │                                                                         │
//! │  create_/update_/delete_…   validate first (no HTTP on failure), then   │
//! │                             run the store mutation. Errors come back    │
//! │                             as CommandError for transient notification; │
//! │                             cached items stay visible.                  │
//! │                                                                         │
//! │  validate_<resource>_draft  pure validation for on-change feedback;     │
//! │                             returns the field → message map.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod forecasting;
pub mod inventory;
pub mod navigation;
pub mod products;
pub mod purchase_orders;
pub mod reports;
pub mod sales_orders;
pub mod stores;
pub mod suppliers;
pub mod warehouses;
