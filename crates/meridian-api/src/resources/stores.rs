//! Store endpoints (`/stores`): full CRUD.

use meridian_core::{NewStore, Store};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Handle for `/stores`.
#[derive(Debug, Clone, Copy)]
pub struct StoresApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Store endpoints.
    pub fn stores(&self) -> StoresApi<'_> {
        StoresApi { client: self }
    }
}

impl StoresApi<'_> {
    /// `GET /stores`
    pub async fn fetch_all(&self) -> ApiResult<Vec<Store>> {
        self.client.get("/stores").await
    }

    /// `POST /stores` — returns the created store with its server id
    /// and `is_verified` flag.
    pub async fn create(&self, draft: &NewStore) -> ApiResult<Store> {
        self.client.post("/stores", draft).await
    }

    /// `PUT /stores/{id}`
    pub async fn update(&self, store: &Store) -> ApiResult<Store> {
        self.client.put(&format!("/stores/{}", store.id), store).await
    }

    /// `DELETE /stores/{id}`
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("/stores/{id}")).await
    }
}
