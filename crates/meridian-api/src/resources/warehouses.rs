//! Warehouse endpoints (`/warehouses`): full CRUD.

use meridian_core::{NewWarehouse, Warehouse};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Handle for `/warehouses`.
#[derive(Debug, Clone, Copy)]
pub struct WarehousesApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Warehouse endpoints.
    pub fn warehouses(&self) -> WarehousesApi<'_> {
        WarehousesApi { client: self }
    }
}

impl WarehousesApi<'_> {
    /// `GET /warehouses`
    pub async fn fetch_all(&self) -> ApiResult<Vec<Warehouse>> {
        self.client.get("/warehouses").await
    }

    /// `POST /warehouses`
    pub async fn create(&self, draft: &NewWarehouse) -> ApiResult<Warehouse> {
        self.client.post("/warehouses", draft).await
    }

    /// `PUT /warehouses/{id}`
    pub async fn update(&self, warehouse: &Warehouse) -> ApiResult<Warehouse> {
        self.client
            .put(&format!("/warehouses/{}", warehouse.id), warehouse)
            .await
    }

    /// `DELETE /warehouses/{id}`
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("/warehouses/{id}")).await
    }
}
