//! Supplier endpoints (`/suppliers`): full CRUD.

use meridian_core::{NewSupplier, Supplier};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Handle for `/suppliers`.
#[derive(Debug, Clone, Copy)]
pub struct SuppliersApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Supplier endpoints.
    pub fn suppliers(&self) -> SuppliersApi<'_> {
        SuppliersApi { client: self }
    }
}

impl SuppliersApi<'_> {
    /// `GET /suppliers`
    pub async fn fetch_all(&self) -> ApiResult<Vec<Supplier>> {
        self.client.get("/suppliers").await
    }

    /// `POST /suppliers`
    pub async fn create(&self, draft: &NewSupplier) -> ApiResult<Supplier> {
        self.client.post("/suppliers", draft).await
    }

    /// `PUT /suppliers/{id}`
    pub async fn update(&self, supplier: &Supplier) -> ApiResult<Supplier> {
        self.client.put(&format!("/suppliers/{}", supplier.id), supplier).await
    }

    /// `DELETE /suppliers/{id}`
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("/suppliers/{id}")).await
    }
}
