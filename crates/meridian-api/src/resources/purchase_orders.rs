//! Purchase-order endpoints (`/purchase-orders`).
//!
//! ## Why No Update/Delete
//! Orders are immutable once placed; they move through their lifecycle
//! via the action endpoints below, and the backend computes every status
//! transition and total. That is why the calling store refetches the
//! collection after each action instead of patching locally.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PENDING ──(receive into warehouse)──► RECEIVED                         │
//! │     │                                                                   │
//! │     └──(payment recorded)──► backend advances status / settles totals   │
//! │                                                                         │
//! │  Action endpoints answer 200 with an empty body: the only way to see    │
//! │  the new state is GET /purchase-orders again.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use meridian_core::{NewPurchaseOrder, OrderStatus, Payment, PurchaseOrder};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Handle for `/purchase-orders`.
#[derive(Debug, Clone, Copy)]
pub struct PurchaseOrdersApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Purchase-order endpoints.
    pub fn purchase_orders(&self) -> PurchaseOrdersApi<'_> {
        PurchaseOrdersApi { client: self }
    }
}

impl PurchaseOrdersApi<'_> {
    /// `GET /purchase-orders`
    pub async fn fetch_all(&self) -> ApiResult<Vec<PurchaseOrder>> {
        self.client.get("/purchase-orders").await
    }

    /// `POST /purchase-orders` — returns the created order with its
    /// server-assigned id, order date, status, and total.
    pub async fn create(&self, draft: &NewPurchaseOrder) -> ApiResult<PurchaseOrder> {
        self.client.post("/purchase-orders", draft).await
    }

    /// `PUT /purchase-orders/{id}/status?status=` — manual status
    /// override; returns the updated order.
    pub async fn update_status(&self, id: i64, status: OrderStatus) -> ApiResult<PurchaseOrder> {
        self.client
            .put_query(
                &format!("/purchase-orders/{id}/status"),
                &[("status", status.to_string())],
            )
            .await
    }

    /// `POST /purchase-orders/{id}/receive?warehouseId=` — books the
    /// delivered goods into the given warehouse. Empty response.
    pub async fn receive(&self, id: i64, warehouse_id: i64) -> ApiResult<()> {
        self.client
            .post_query_unit(
                &format!("/purchase-orders/{id}/receive"),
                &[("warehouseId", warehouse_id)],
            )
            .await
    }

    /// `POST /purchase-orders/{id}/payment` — records a payment against
    /// the order. Empty response.
    pub async fn make_payment(&self, id: i64, payment: &Payment) -> ApiResult<()> {
        self.client
            .post_unit(&format!("/purchase-orders/{id}/payment"), payment)
            .await
    }
}
