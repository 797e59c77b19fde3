//! # API State
//!
//! The two HTTP clients, built once at startup from the endpoint
//! configuration and shared by every command.

use meridian_api::{ApiClient, ApiConfig, ForecastClient};

/// Tauri-managed HTTP clients.
#[derive(Debug, Clone)]
pub struct ApiState {
    /// Authenticated client for the ERP backend.
    pub api: ApiClient,
    /// Unauthenticated client for the forecasting sidecar.
    pub forecast: ForecastClient,
}

impl ApiState {
    /// Builds both clients from resolved endpoint configuration.
    pub fn new(config: &ApiConfig) -> Self {
        ApiState {
            api: ApiClient::new(config.api_url.clone()),
            forecast: ForecastClient::new(config.forecast_url.clone()),
        }
    }
}
