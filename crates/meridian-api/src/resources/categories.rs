//! Category endpoints (`/categories`).
//!
//! No update endpoint exists — a category is just a name, and the
//! backend treats renames as delete + create.

use meridian_core::{Category, NewCategory};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Handle for `/categories`.
#[derive(Debug, Clone, Copy)]
pub struct CategoriesApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Category endpoints.
    pub fn categories(&self) -> CategoriesApi<'_> {
        CategoriesApi { client: self }
    }
}

impl CategoriesApi<'_> {
    /// `GET /categories`
    pub async fn fetch_all(&self) -> ApiResult<Vec<Category>> {
        self.client.get("/categories").await
    }

    /// `POST /categories`
    pub async fn create(&self, draft: &NewCategory) -> ApiResult<Category> {
        self.client.post("/categories", draft).await
    }

    /// `DELETE /categories/{id}`
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("/categories/{id}")).await
    }
}
