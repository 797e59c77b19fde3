//! Product endpoints (`/products`): full CRUD.

use meridian_core::{NewProduct, Product};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Handle for `/products`.
#[derive(Debug, Clone, Copy)]
pub struct ProductsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Product endpoints.
    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi { client: self }
    }
}

impl ProductsApi<'_> {
    /// `GET /products`
    pub async fn fetch_all(&self) -> ApiResult<Vec<Product>> {
        self.client.get("/products").await
    }

    /// `POST /products` — returns the created product with its server id.
    pub async fn create(&self, draft: &NewProduct) -> ApiResult<Product> {
        self.client.post("/products", draft).await
    }

    /// `PUT /products/{id}`
    pub async fn update(&self, product: &Product) -> ApiResult<Product> {
        self.client.put(&format!("/products/{}", product.id), product).await
    }

    /// `DELETE /products/{id}`
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("/products/{id}")).await
    }
}
