//! Sales-order endpoints (`/sales-orders`).
//!
//! Same immutable-order model as purchase orders: place, then drive the
//! lifecycle through action endpoints (ship, payment) that answer with an
//! empty body, and refetch to observe the server-computed state.

use meridian_core::{Payment, PlaceSalesOrder, SalesOrder, SalesStatus};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Handle for `/sales-orders`.
#[derive(Debug, Clone, Copy)]
pub struct SalesOrdersApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Sales-order endpoints.
    pub fn sales_orders(&self) -> SalesOrdersApi<'_> {
        SalesOrdersApi { client: self }
    }
}

impl SalesOrdersApi<'_> {
    /// `GET /sales-orders`
    pub async fn fetch_all(&self) -> ApiResult<Vec<SalesOrder>> {
        self.client.get("/sales-orders").await
    }

    /// `POST /sales-orders` — places the order; the backend prices the
    /// lines from the catalog and returns the full order.
    pub async fn place(&self, draft: &PlaceSalesOrder) -> ApiResult<SalesOrder> {
        self.client.post("/sales-orders", draft).await
    }

    /// `POST /sales-orders/{id}/ship` — dispatches a pending order.
    /// Empty request and response.
    pub async fn ship(&self, id: i64) -> ApiResult<()> {
        self.client.post_action(&format!("/sales-orders/{id}/ship")).await
    }

    /// `POST /sales-orders/{id}/payment` — records the buyer's payment.
    /// Empty response.
    pub async fn process_payment(&self, id: i64, payment: &Payment) -> ApiResult<()> {
        self.client
            .post_unit(&format!("/sales-orders/{id}/payment"), payment)
            .await
    }

    /// `PUT /sales-orders/{id}/status?status=` — manual status override;
    /// returns the updated order.
    pub async fn update_status(&self, id: i64, status: SalesStatus) -> ApiResult<SalesOrder> {
        self.client
            .put_query(
                &format!("/sales-orders/{id}/status"),
                &[("status", status.to_string())],
            )
            .await
    }
}
