//! # Inventory Commands
//!
//! Stock records for one warehouse at a time. The collection's identity
//! depends on the selected warehouse, so this fetch always refreshes
//! wholesale — the idle guard only makes sense for parameterless
//! collections.

use meridian_core::InventoryRecord;
use meridian_state::ResourceState;
use tauri::State;
use tracing::debug;

use crate::error::CommandError;
use crate::state::{ApiState, ResourcesState};

/// Fetches the stock records of the given warehouse, replacing whatever
/// warehouse was shown before.
#[tauri::command]
pub async fn fetch_inventory(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    warehouse_id: i64,
) -> Result<ResourceState<InventoryRecord>, CommandError> {
    debug!(warehouse_id, "fetch_inventory command");
    let client = api.api.clone();
    let _ = resources
        .inventory
        .refresh(move || async move {
            client
                .inventory()
                .by_warehouse(warehouse_id)
                .await
                .map_err(|err| err.user_message("Failed to fetch inventory"))
        })
        .await;
    Ok(resources.inventory.snapshot())
}
