//! # meridian-api: REST Client Layer
//!
//! Typed clients for the ERP backend and the forecasting sidecar.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       One Call, One Request                             │
//! │                                                                         │
//! │  store lifecycle op                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  api.products().fetch_all()                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiClient::get("/products")                                           │
//! │   ├── attach Authorization: Bearer <token>   (when logged in)          │
//! │   ├── exactly one HTTP round-trip — no retry, no cache                 │
//! │   └── 2xx → decode Vec<Product>                                        │
//! │       4xx/5xx → ApiError::Http { status, backend message }             │
//! │       transport → ApiError::Network / ApiError::Decode                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`client`] - the shared authenticated `ApiClient`
//! - [`config`] - endpoint configuration (env > TOML > defaults)
//! - [`error`] - `ApiError` and backend-message extraction
//! - [`resources`] - per-resource endpoint handles
//! - [`forecast`] - the unauthenticated forecasting sidecar client

pub mod client;
pub mod config;
pub mod error;
pub mod forecast;
pub mod resources;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use forecast::ForecastClient;
