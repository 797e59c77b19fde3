//! # Warehouse Commands
//!
//! CRUD for warehouses.

use meridian_core::validation;
use meridian_core::{FieldErrors, NewWarehouse, Warehouse};
use meridian_state::ResourceState;
use tauri::State;
use tracing::debug;

use crate::error::CommandError;
use crate::state::{ApiState, ResourcesState};

/// Fetches the warehouse collection (only when idle; `force` bypasses).
#[tauri::command]
pub async fn fetch_warehouses(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    force: Option<bool>,
) -> Result<ResourceState<Warehouse>, CommandError> {
    debug!(force = force.unwrap_or(false), "fetch_warehouses command");
    let client = api.api.clone();
    let op = move || async move {
        client
            .warehouses()
            .fetch_all()
            .await
            .map_err(|err| err.user_message("Failed to fetch warehouses"))
    };

    let store = &resources.warehouses;
    if force.unwrap_or(false) {
        let _ = store.refresh(op).await;
    } else {
        let _ = store.fetch_all(op).await;
    }
    Ok(store.snapshot())
}

/// Creates a warehouse.
#[tauri::command]
pub async fn create_warehouse(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    draft: NewWarehouse,
) -> Result<Warehouse, CommandError> {
    validation::check(validation::validate_warehouse(&draft))?;

    let client = api.api.clone();
    resources
        .warehouses
        .create(move || async move {
            client
                .warehouses()
                .create(&draft)
                .await
                .map_err(|err| err.user_message("Failed to create warehouse"))
        })
        .await
        .map_err(CommandError::request_failed)
}

/// Updates a warehouse.
#[tauri::command]
pub async fn update_warehouse(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    warehouse: Warehouse,
) -> Result<Warehouse, CommandError> {
    let draft = NewWarehouse {
        name: warehouse.name.clone(),
        location: warehouse.location.clone(),
    };
    validation::check(validation::validate_warehouse(&draft))?;

    let client = api.api.clone();
    resources
        .warehouses
        .update(move || async move {
            client
                .warehouses()
                .update(&warehouse)
                .await
                .map_err(|err| err.user_message("Failed to update warehouse"))
        })
        .await
        .map_err(CommandError::request_failed)
}

/// Deletes a warehouse after frontend confirmation.
#[tauri::command]
pub async fn delete_warehouse(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    id: i64,
) -> Result<(), CommandError> {
    let client = api.api.clone();
    resources
        .warehouses
        .delete(id, move || async move {
            client
                .warehouses()
                .delete(id)
                .await
                .map_err(|err| err.user_message("Failed to delete warehouse"))
        })
        .await
        .map_err(CommandError::request_failed)
}

/// Pure validation for the warehouse modal.
#[tauri::command]
pub fn validate_warehouse_draft(draft: NewWarehouse) -> FieldErrors {
    validation::validate_warehouse(&draft)
}
