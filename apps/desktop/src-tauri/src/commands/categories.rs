//! # Category Commands
//!
//! Fetch, create, delete — the backend has no category update endpoint.

use meridian_core::validation;
use meridian_core::{Category, FieldErrors, NewCategory};
use meridian_state::ResourceState;
use tauri::State;
use tracing::debug;

use crate::error::CommandError;
use crate::state::{ApiState, ResourcesState};

/// Fetches the category collection (only when idle; `force` bypasses).
#[tauri::command]
pub async fn fetch_categories(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    force: Option<bool>,
) -> Result<ResourceState<Category>, CommandError> {
    debug!(force = force.unwrap_or(false), "fetch_categories command");
    let client = api.api.clone();
    let op = move || async move {
        client
            .categories()
            .fetch_all()
            .await
            .map_err(|err| err.user_message("Failed to fetch categories"))
    };

    let store = &resources.categories;
    if force.unwrap_or(false) {
        let _ = store.refresh(op).await;
    } else {
        let _ = store.fetch_all(op).await;
    }
    Ok(store.snapshot())
}

/// Creates a category.
#[tauri::command]
pub async fn create_category(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    draft: NewCategory,
) -> Result<Category, CommandError> {
    validation::check(validation::validate_category(&draft))?;

    let client = api.api.clone();
    resources
        .categories
        .create(move || async move {
            client
                .categories()
                .create(&draft)
                .await
                .map_err(|err| err.user_message("Failed to create category"))
        })
        .await
        .map_err(CommandError::request_failed)
}

/// Deletes a category after frontend confirmation.
#[tauri::command]
pub async fn delete_category(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    id: i64,
) -> Result<(), CommandError> {
    let client = api.api.clone();
    resources
        .categories
        .delete(id, move || async move {
            client
                .categories()
                .delete(id)
                .await
                .map_err(|err| err.user_message("Failed to delete category"))
        })
        .await
        .map_err(CommandError::request_failed)
}

/// Pure validation for the category modal.
#[tauri::command]
pub fn validate_category_draft(draft: NewCategory) -> FieldErrors {
    validation::validate_category(&draft)
}
