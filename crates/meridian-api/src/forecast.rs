//! # Forecasting Sidecar Client
//!
//! The forecasting service is a separate HTTP collaborator with its own
//! base URL, its own payload schema, and no authentication.
//!
//! ## Two Schemas, One Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Forecast Run                                       │
//! │                                                                         │
//! │  ERP backend                      Forecasting sidecar                   │
//! │  ───────────                      ───────────────────                   │
//! │                                                                         │
//! │  GET /sales-records ── camelCase SalesRecord rows                       │
//! │       │                                                                 │
//! │       ▼  re-keyed here (Date, Store_ID, Units_Sold, …)                  │
//! │  POST /predict/  ─────────────────────────────────────►                 │
//! │       ◄───────────────────────── { "predictions": […] }                 │
//! │                                                                         │
//! │  The sidecar's error body uses "detail" where the ERP backend uses      │
//! │  "message"; extraction below accounts for that.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use meridian_core::{ForecastResponse, SalesRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ApiError, ApiResult};

/// A sales record re-keyed to the sidecar's ingestion schema.
#[derive(Debug, Clone, Serialize)]
struct SidecarRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Store_ID")]
    store_id: i64,
    #[serde(rename = "Product_ID")]
    product_id: i64,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Region")]
    region: String,
    #[serde(rename = "Inventory_Level")]
    inventory_level: f64,
    #[serde(rename = "Units_Sold")]
    units_sold: f64,
    #[serde(rename = "Units_Ordered")]
    units_ordered: f64,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "Discount")]
    discount: f64,
    #[serde(rename = "Weather_Condition")]
    weather_condition: String,
    #[serde(rename = "Holiday_Promotion")]
    holiday_promotion: i64,
    #[serde(rename = "Competitor_Pricing")]
    competitor_pricing: f64,
    #[serde(rename = "Seasonality")]
    seasonality: String,
}

impl From<&SalesRecord> for SidecarRecord {
    fn from(record: &SalesRecord) -> Self {
        SidecarRecord {
            date: record.date.to_string(),
            store_id: record.store_id,
            product_id: record.product_id,
            category: record.category.clone(),
            region: record.region.clone(),
            inventory_level: record.inventory_level,
            units_sold: record.units_sold,
            units_ordered: record.units_ordered,
            price: record.price,
            discount: record.discount,
            weather_condition: record.weather_condition.clone(),
            holiday_promotion: record.holiday_promotion,
            competitor_pricing: record.competitor_pricing,
            seasonality: record.seasonality.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct PredictRequest {
    records: Vec<SidecarRecord>,
}

/// Error body shape of the sidecar (`detail`, not `message`).
#[derive(Debug, Deserialize)]
struct SidecarErrorBody {
    detail: Option<String>,
}

/// Client for the forecasting sidecar. Unauthenticated.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: reqwest::Client,
    base_url: String,
}

impl ForecastClient {
    /// Creates a client for the sidecar's base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        ForecastClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// `POST /predict/` — sends historical records, returns predictions.
    pub async fn predict(&self, records: &[SalesRecord]) -> ApiResult<ForecastResponse> {
        let request = PredictRequest {
            records: records.iter().map(SidecarRecord::from).collect(),
        };
        debug!(count = request.records.len(), "sending records to forecasting sidecar");

        let response = self
            .http
            .post(format!("{}/predict/", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json::<ForecastResponse>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<SidecarErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.detail)
                .filter(|d| !d.is_empty());
            Err(ApiError::Http {
                status: status.as_u16(),
                message: detail,
            })
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> SalesRecord {
        SalesRecord {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            store_id: 3,
            product_id: 11,
            category: "Electronics".to_string(),
            region: "North".to_string(),
            inventory_level: 120.0,
            units_sold: 14.0,
            units_ordered: 20.0,
            price: 19.99,
            discount: 0.1,
            weather_condition: "Rainy".to_string(),
            holiday_promotion: 1,
            competitor_pricing: 18.5,
            seasonality: "Summer".to_string(),
        }
    }

    #[test]
    fn test_sidecar_record_keys() {
        let json = serde_json::to_value(SidecarRecord::from(&record())).unwrap();
        assert_eq!(json["Date"], "2024-06-01");
        assert_eq!(json["Store_ID"], 3);
        assert_eq!(json["Units_Sold"], 14.0);
        assert_eq!(json["Holiday_Promotion"], 1);
        assert_eq!(json["Competitor_Pricing"], 18.5);
        // camelCase keys from the ERP schema must not leak through
        assert!(json.get("storeId").is_none());
    }

    #[test]
    fn test_predict_request_wraps_records() {
        let request = PredictRequest {
            records: vec![SidecarRecord::from(&record())],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json["records"].is_array());
        assert_eq!(json["records"].as_array().unwrap().len(), 1);
    }
}
