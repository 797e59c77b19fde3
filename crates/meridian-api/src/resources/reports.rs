//! Report endpoints (`/reports/*`, `/sales-records`).
//!
//! All read-only aggregations computed server-side. Filters go out as
//! query parameters; `None` fields are simply omitted.

use meridian_core::{
    InventorySummary, LowStockItem, PurchaseOrder, PurchaseOrderFilter, SalesRecord,
    SalesRecordFilter,
};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Handle for the report endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ReportsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Report endpoints.
    pub fn reports(&self) -> ReportsApi<'_> {
        ReportsApi { client: self }
    }
}

impl ReportsApi<'_> {
    /// `GET /reports/inventory-summary`
    pub async fn inventory_summary(&self) -> ApiResult<InventorySummary> {
        self.client.get("/reports/inventory-summary").await
    }

    /// `GET /reports/purchase-orders?startDate&endDate&supplierId&status`
    pub async fn purchase_order_history(
        &self,
        filter: &PurchaseOrderFilter,
    ) -> ApiResult<Vec<PurchaseOrder>> {
        self.client.get_query("/reports/purchase-orders", filter).await
    }

    /// `GET /reports/low-stock?threshold`
    pub async fn low_stock(&self, threshold: Option<i64>) -> ApiResult<Vec<LowStockItem>> {
        self.client
            .get_query("/reports/low-stock", &[("threshold", threshold)])
            .await
    }

    /// `GET /sales-records?startDate&endDate` — historical sales rows
    /// consumed by the forecasting flow.
    pub async fn sales_records(&self, filter: &SalesRecordFilter) -> ApiResult<Vec<SalesRecord>> {
        self.client.get_query("/sales-records", filter).await
    }
}
