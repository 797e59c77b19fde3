//! # Report State
//!
//! Slice holding the three report payloads: the inventory summary, the
//! filtered purchase-order history, and the low-stock list. The shared
//! `status` tracks the summary fetch (the report page's primary load);
//! history and low-stock arrive via their own fulfilled reducers and the
//! page renders each section as it lands.

use meridian_core::{InventorySummary, LowStockItem, PurchaseOrder};
use serde::Serialize;

use crate::status::FetchStatus;

/// State of the reports view.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportState {
    pub inventory_summary: Option<InventorySummary>,
    pub purchase_order_history: Vec<PurchaseOrder>,
    pub low_stock_items: Vec<LowStockItem>,
    pub status: FetchStatus,
    pub error: Option<String>,
}

impl ReportState {
    /// Summary fetch started.
    pub fn summary_pending(&mut self) {
        self.status = FetchStatus::Loading;
        self.error = None;
    }

    /// Summary fetch succeeded.
    pub fn summary_fulfilled(&mut self, summary: InventorySummary) {
        self.inventory_summary = Some(summary);
        self.status = FetchStatus::Succeeded;
    }

    /// Summary fetch failed.
    pub fn summary_rejected(&mut self, message: impl Into<String>) {
        self.status = FetchStatus::Failed;
        self.error = Some(message.into());
    }

    /// Purchase-order history arrived (independent of `status`).
    pub fn history_fulfilled(&mut self, orders: Vec<PurchaseOrder>) {
        self.purchase_order_history = orders;
    }

    /// Low-stock rows arrived (independent of `status`).
    pub fn low_stock_fulfilled(&mut self, items: Vec<LowStockItem>) {
        self.low_stock_items = items;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> InventorySummary {
        InventorySummary {
            total_products: 120,
            total_stock_quantity: 5400,
            total_stock_value: 86250.0,
            low_stock_count: 7,
        }
    }

    #[test]
    fn test_summary_lifecycle() {
        let mut state = ReportState::default();
        state.summary_pending();
        assert_eq!(state.status, FetchStatus::Loading);

        state.summary_fulfilled(summary());
        assert_eq!(state.status, FetchStatus::Succeeded);
        assert_eq!(state.inventory_summary.as_ref().unwrap().low_stock_count, 7);
    }

    #[test]
    fn test_summary_failure_keeps_other_sections() {
        let mut state = ReportState::default();
        state.low_stock_fulfilled(vec![LowStockItem {
            product_id: 4,
            product_name: "Desk Lamp".to_string(),
            sku: "DL-01".to_string(),
            warehouse_id: 1,
            quantity: 0,
            threshold: 10,
        }]);

        state.summary_pending();
        state.summary_rejected("Failed to fetch summary");

        assert_eq!(state.status, FetchStatus::Failed);
        assert_eq!(state.low_stock_items.len(), 1);
    }

    #[test]
    fn test_history_replaces_wholesale() {
        let mut state = ReportState::default();
        state.history_fulfilled(vec![]);
        assert!(state.purchase_order_history.is_empty());
    }
}
