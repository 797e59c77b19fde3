//! # Forecast State
//!
//! Slice for the two-step forecasting flow: fetch historical sales
//! records from the ERP backend, then send them to the forecasting
//! sidecar for numeric predictions. Both halves resolve together — a
//! fulfilled run carries the records *and* the predictions, so the chart
//! always plots a consistent pair.

use meridian_core::SalesRecord;
use serde::Serialize;

use crate::status::FetchStatus;

/// State of the forecasting view.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastState {
    /// Historical records the prediction was computed from.
    pub historical_records: Vec<SalesRecord>,
    /// Sidecar predictions; `None` until a run completes.
    pub prediction: Option<Vec<f64>>,
    pub status: FetchStatus,
    pub error: Option<String>,
}

impl ForecastState {
    /// A forecast run started: clear the previous prediction so the UI
    /// never shows numbers from a stale date range.
    pub fn run_pending(&mut self) {
        self.status = FetchStatus::Loading;
        self.error = None;
        self.prediction = None;
    }

    /// Both halves of the run completed.
    pub fn run_fulfilled(&mut self, records: Vec<SalesRecord>, predictions: Vec<f64>) {
        self.historical_records = records;
        self.prediction = Some(predictions);
        self.status = FetchStatus::Succeeded;
    }

    /// Either half failed (or the range had no data).
    pub fn run_rejected(&mut self, message: impl Into<String>) {
        self.status = FetchStatus::Failed;
        self.error = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> SalesRecord {
        SalesRecord {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            store_id: 1,
            product_id: 2,
            category: "Electronics".to_string(),
            region: "North".to_string(),
            inventory_level: 120.0,
            units_sold: 14.0,
            units_ordered: 20.0,
            price: 19.99,
            discount: 0.0,
            weather_condition: "Sunny".to_string(),
            holiday_promotion: 0,
            competitor_pricing: 18.5,
            seasonality: "Summer".to_string(),
        }
    }

    #[test]
    fn test_run_clears_stale_prediction() {
        let mut state = ForecastState::default();
        state.run_fulfilled(vec![record()], vec![10.0, 11.5]);
        assert!(state.prediction.is_some());

        state.run_pending();
        assert!(state.prediction.is_none());
        assert_eq!(state.status, FetchStatus::Loading);
    }

    #[test]
    fn test_fulfilled_carries_consistent_pair() {
        let mut state = ForecastState::default();
        state.run_pending();
        state.run_fulfilled(vec![record()], vec![12.0]);

        assert_eq!(state.historical_records.len(), 1);
        assert_eq!(state.prediction.as_deref(), Some(&[12.0][..]));
        assert_eq!(state.status, FetchStatus::Succeeded);
    }

    #[test]
    fn test_empty_range_failure() {
        let mut state = ForecastState::default();
        state.run_pending();
        state.run_rejected("No historical data found for the selected range.");

        assert_eq!(state.status, FetchStatus::Failed);
        assert_eq!(
            state.error.as_deref(),
            Some("No historical data found for the selected range.")
        );
        assert!(state.prediction.is_none());
    }
}
