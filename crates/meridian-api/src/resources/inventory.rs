//! Inventory endpoints (`/inventory`).
//!
//! Read-only: stock levels only ever change server-side (receiving
//! purchase orders in, shipping sales orders out).

use meridian_core::InventoryRecord;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Handle for `/inventory`.
#[derive(Debug, Clone, Copy)]
pub struct InventoryApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Inventory endpoints.
    pub fn inventory(&self) -> InventoryApi<'_> {
        InventoryApi { client: self }
    }
}

impl InventoryApi<'_> {
    /// `GET /inventory/warehouse/{warehouseId}` — stock records for one
    /// warehouse.
    pub async fn by_warehouse(&self, warehouse_id: i64) -> ApiResult<Vec<InventoryRecord>> {
        self.client
            .get(&format!("/inventory/warehouse/{warehouse_id}"))
            .await
    }
}
