//! # Product Commands
//!
//! The product management page: idle-guarded fetch, CRUD driven through
//! the product store, on-change validation, and the client-side
//! substring search over name and SKU.
//!
//! The page also needs categories and suppliers to resolve foreign keys;
//! it invokes their fetch commands alongside `fetch_products` on mount.

use meridian_core::validation;
use meridian_core::{FieldErrors, NewProduct, Product};
use meridian_state::ResourceState;
use tauri::State;
use tracing::debug;

use crate::error::CommandError;
use crate::state::{ApiState, ResourcesState};

/// Fetches the product collection (only when idle; `force` bypasses).
#[tauri::command]
pub async fn fetch_products(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    force: Option<bool>,
) -> Result<ResourceState<Product>, CommandError> {
    debug!(force = force.unwrap_or(false), "fetch_products command");
    let client = api.api.clone();
    let op = move || async move {
        client
            .products()
            .fetch_all()
            .await
            .map_err(|err| err.user_message("Failed to fetch products"))
    };

    let store = &resources.products;
    if force.unwrap_or(false) {
        let _ = store.refresh(op).await;
    } else {
        let _ = store.fetch_all(op).await;
    }
    Ok(store.snapshot())
}

/// Creates a product. The draft is validated first; an invalid draft
/// never reaches the network.
#[tauri::command]
pub async fn create_product(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    draft: NewProduct,
) -> Result<Product, CommandError> {
    validation::check(validation::validate_product(&draft))?;

    let client = api.api.clone();
    resources
        .products
        .create(move || async move {
            client
                .products()
                .create(&draft)
                .await
                .map_err(|err| err.user_message("Failed to create product"))
        })
        .await
        .map_err(CommandError::request_failed)
}

/// Updates a product. The form merges the entity's existing fields with
/// the edits, so the full entity arrives here with its id intact.
#[tauri::command]
pub async fn update_product(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    product: Product,
) -> Result<Product, CommandError> {
    let draft = NewProduct {
        sku: product.sku.clone(),
        name: product.name.clone(),
        description: product.description.clone(),
        category_id: product.category_id,
        supplier_id: product.supplier_id,
        unit_price: product.unit_price,
    };
    validation::check(validation::validate_product(&draft))?;

    let client = api.api.clone();
    resources
        .products
        .update(move || async move {
            client
                .products()
                .update(&product)
                .await
                .map_err(|err| err.user_message("Failed to update product"))
        })
        .await
        .map_err(CommandError::request_failed)
}

/// Deletes a product. The frontend confirms with the user before
/// invoking this.
#[tauri::command]
pub async fn delete_product(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    id: i64,
) -> Result<(), CommandError> {
    let client = api.api.clone();
    resources
        .products
        .delete(id, move || async move {
            client
                .products()
                .delete(id)
                .await
                .map_err(|err| err.user_message("Failed to delete product"))
        })
        .await
        .map_err(CommandError::request_failed)
}

/// Case-insensitive substring search over the cached collection
/// (name and SKU). Empty query returns everything.
#[tauri::command]
pub fn search_products(resources: State<'_, ResourcesState>, query: String) -> Vec<Product> {
    let query = query.trim().to_string();
    resources.products.with_state(|state| {
        if query.is_empty() {
            state.items.clone()
        } else {
            state
                .items
                .iter()
                .filter(|product| product.matches_query(&query))
                .cloned()
                .collect()
        }
    })
}

/// Pure validation for on-change feedback in the product modal.
#[tauri::command]
pub fn validate_product_draft(draft: NewProduct) -> FieldErrors {
    validation::validate_product(&draft)
}
