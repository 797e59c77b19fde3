//! # Forecasting Commands
//!
//! The two-step forecast run: pull historical sales records from the ERP
//! backend, then hand them to the forecasting sidecar for predictions.
//! An empty date range fails fast — the sidecar is never called with
//! nothing to predict from.

use meridian_core::SalesRecordFilter;
use meridian_state::ForecastState;
use tauri::State;
use tracing::debug;

use crate::error::CommandError;
use crate::state::{ApiState, ForecastStore};

/// Message for a date range with no historical rows.
const NO_DATA_MESSAGE: &str = "No historical data found for the selected range.";

/// Runs a forecast over the given date range.
#[tauri::command]
pub async fn run_forecast(
    api: State<'_, ApiState>,
    forecast: State<'_, ForecastStore>,
    filter: SalesRecordFilter,
) -> Result<ForecastState, CommandError> {
    debug!(?filter, "run_forecast command");
    forecast.with_state_mut(|state| state.run_pending());

    // Step 1: historical records from the ERP backend.
    let records = match api.api.reports().sales_records(&filter).await {
        Ok(records) => records,
        Err(err) => {
            let message = err.user_message("Forecasting process failed");
            forecast.with_state_mut(|state| state.run_rejected(message.clone()));
            return Err(CommandError::request_failed(message));
        }
    };

    if records.is_empty() {
        forecast.with_state_mut(|state| state.run_rejected(NO_DATA_MESSAGE));
        return Err(CommandError::request_failed(NO_DATA_MESSAGE));
    }

    // Step 2: predictions from the sidecar.
    match api.forecast.predict(&records).await {
        Ok(response) => {
            forecast.with_state_mut(|state| state.run_fulfilled(records, response.predictions));
            Ok(forecast.with_state(|state| state.clone()))
        }
        Err(err) => {
            let message = err.user_message("Forecasting process failed");
            forecast.with_state_mut(|state| state.run_rejected(message.clone()));
            Err(CommandError::request_failed(message))
        }
    }
}

/// Current forecast slice for re-renders without a new run.
#[tauri::command]
pub fn forecast_state(forecast: State<'_, ForecastStore>) -> ForecastState {
    forecast.with_state(|state| state.clone())
}
