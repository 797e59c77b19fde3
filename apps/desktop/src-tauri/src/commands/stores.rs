//! # Store Commands
//!
//! CRUD for retail stores. `is_verified` is backend-owned: creates omit
//! it, and the badge in the list simply renders what the fetch returned.

use meridian_core::validation;
use meridian_core::{FieldErrors, NewStore, Store};
use meridian_state::ResourceState;
use tauri::State;
use tracing::debug;

use crate::error::CommandError;
use crate::state::{ApiState, ResourcesState};

/// Fetches the store collection (only when idle; `force` bypasses).
#[tauri::command]
pub async fn fetch_stores(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    force: Option<bool>,
) -> Result<ResourceState<Store>, CommandError> {
    debug!(force = force.unwrap_or(false), "fetch_stores command");
    let client = api.api.clone();
    let op = move || async move {
        client
            .stores()
            .fetch_all()
            .await
            .map_err(|err| err.user_message("Failed to fetch stores"))
    };

    let store = &resources.stores;
    if force.unwrap_or(false) {
        let _ = store.refresh(op).await;
    } else {
        let _ = store.fetch_all(op).await;
    }
    Ok(store.snapshot())
}

/// Registers a new store.
#[tauri::command]
pub async fn create_store(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    draft: NewStore,
) -> Result<Store, CommandError> {
    validation::check(validation::validate_store(&draft))?;

    let client = api.api.clone();
    resources
        .stores
        .create(move || async move {
            client
                .stores()
                .create(&draft)
                .await
                .map_err(|err| err.user_message("Failed to create store"))
        })
        .await
        .map_err(CommandError::request_failed)
}

/// Updates a store's registration details.
#[tauri::command]
pub async fn update_store(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    store: Store,
) -> Result<Store, CommandError> {
    let draft = NewStore {
        store_name: store.store_name.clone(),
        store_registration_number: store.store_registration_number.clone(),
        tax_id: store.tax_id.clone(),
        operational_details: store.operational_details.clone(),
    };
    validation::check(validation::validate_store(&draft))?;

    let client = api.api.clone();
    resources
        .stores
        .update(move || async move {
            client
                .stores()
                .update(&store)
                .await
                .map_err(|err| err.user_message("Failed to update store"))
        })
        .await
        .map_err(CommandError::request_failed)
}

/// Deletes a store after frontend confirmation.
#[tauri::command]
pub async fn delete_store(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    id: i64,
) -> Result<(), CommandError> {
    let client = api.api.clone();
    resources
        .stores
        .delete(id, move || async move {
            client
                .stores()
                .delete(id)
                .await
                .map_err(|err| err.user_message("Failed to delete store"))
        })
        .await
        .map_err(CommandError::request_failed)
}

/// Pure validation for the store modal.
#[tauri::command]
pub fn validate_store_draft(draft: NewStore) -> FieldErrors {
    validation::validate_store(&draft)
}
