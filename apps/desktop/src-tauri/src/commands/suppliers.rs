//! # Supplier Commands
//!
//! CRUD for suppliers (supply-chain coordinator's page).

use meridian_core::validation;
use meridian_core::{FieldErrors, NewSupplier, Supplier};
use meridian_state::ResourceState;
use tauri::State;
use tracing::debug;

use crate::error::CommandError;
use crate::state::{ApiState, ResourcesState};

/// Fetches the supplier collection (only when idle; `force` bypasses).
#[tauri::command]
pub async fn fetch_suppliers(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    force: Option<bool>,
) -> Result<ResourceState<Supplier>, CommandError> {
    debug!(force = force.unwrap_or(false), "fetch_suppliers command");
    let client = api.api.clone();
    let op = move || async move {
        client
            .suppliers()
            .fetch_all()
            .await
            .map_err(|err| err.user_message("Failed to fetch suppliers"))
    };

    let store = &resources.suppliers;
    if force.unwrap_or(false) {
        let _ = store.refresh(op).await;
    } else {
        let _ = store.fetch_all(op).await;
    }
    Ok(store.snapshot())
}

/// Creates a supplier.
#[tauri::command]
pub async fn create_supplier(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    draft: NewSupplier,
) -> Result<Supplier, CommandError> {
    validation::check(validation::validate_supplier(&draft))?;

    let client = api.api.clone();
    resources
        .suppliers
        .create(move || async move {
            client
                .suppliers()
                .create(&draft)
                .await
                .map_err(|err| err.user_message("Failed to create supplier"))
        })
        .await
        .map_err(CommandError::request_failed)
}

/// Updates a supplier.
#[tauri::command]
pub async fn update_supplier(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    supplier: Supplier,
) -> Result<Supplier, CommandError> {
    let draft = NewSupplier {
        name: supplier.name.clone(),
        contact_person: supplier.contact_person.clone(),
        email: supplier.email.clone(),
        phone: supplier.phone.clone(),
        api_url: supplier.api_url.clone(),
    };
    validation::check(validation::validate_supplier(&draft))?;

    let client = api.api.clone();
    resources
        .suppliers
        .update(move || async move {
            client
                .suppliers()
                .update(&supplier)
                .await
                .map_err(|err| err.user_message("Failed to update supplier"))
        })
        .await
        .map_err(CommandError::request_failed)
}

/// Deletes a supplier after frontend confirmation.
#[tauri::command]
pub async fn delete_supplier(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    id: i64,
) -> Result<(), CommandError> {
    let client = api.api.clone();
    resources
        .suppliers
        .delete(id, move || async move {
            client
                .suppliers()
                .delete(id)
                .await
                .map_err(|err| err.user_message("Failed to delete supplier"))
        })
        .await
        .map_err(CommandError::request_failed)
}

/// Pure validation for the supplier modal.
#[tauri::command]
pub fn validate_supplier_draft(draft: NewSupplier) -> FieldErrors {
    validation::validate_supplier(&draft)
}
