//! # Resource Handles
//!
//! One handle per backend endpoint family, in the repository style: the
//! shared [`ApiClient`](crate::ApiClient) hands out lightweight views
//! (`api.products()`, `api.reports()`, …) and each handle exposes one
//! method per endpoint.
//!
//! ```rust,ignore
//! let api = ApiClient::new(config.api_url);
//!
//! // CRUD family
//! let products = api.products().fetch_all().await?;
//! let created = api.products().create(&draft).await?;
//!
//! // Action endpoints
//! api.purchase_orders().receive(42, warehouse_id).await?;
//! api.sales_orders().ship(7).await?;
//! ```
//!
//! Handles hold a borrow of the client, perform exactly one HTTP call per
//! method, and surface failures as [`ApiError`](crate::ApiError) for the
//! calling store action to translate.

mod auth;
mod categories;
mod inventory;
mod products;
mod purchase_orders;
mod reports;
mod sales_orders;
mod stores;
mod suppliers;
mod warehouses;

pub use auth::AuthApi;
pub use categories::CategoriesApi;
pub use inventory::InventoryApi;
pub use products::ProductsApi;
pub use purchase_orders::PurchaseOrdersApi;
pub use reports::ReportsApi;
pub use sales_orders::SalesOrdersApi;
pub use stores::StoresApi;
pub use suppliers::SuppliersApi;
pub use warehouses::WarehousesApi;
