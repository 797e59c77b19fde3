//! # Sales Order Commands
//!
//! Placement plus the ship/pay lifecycle. Same refetch-after-action
//! policy as purchase orders: the action endpoints answer empty and the
//! backend owns status transitions and totals.
//!
//! The page resolves `buyer_store_id` against the stores collection for
//! display, so its search runs over the resolved store name as well as
//! the order id.

use meridian_core::validation;
use meridian_core::{FieldErrors, Payment, PlaceSalesOrder, SalesOrder, SalesStatus};
use meridian_state::ResourceState;
use tauri::State;
use tracing::debug;

use crate::error::CommandError;
use crate::state::{ApiState, ResourcesState};

/// Fetches the sales-order collection (only when idle; `force` bypasses).
#[tauri::command]
pub async fn fetch_sales_orders(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    force: Option<bool>,
) -> Result<ResourceState<SalesOrder>, CommandError> {
    debug!(force = force.unwrap_or(false), "fetch_sales_orders command");
    let client = api.api.clone();
    let op = move || async move {
        client
            .sales_orders()
            .fetch_all()
            .await
            .map_err(|err| err.user_message("Failed to fetch sales orders"))
    };

    let store = &resources.sales_orders;
    if force.unwrap_or(false) {
        let _ = store.refresh(op).await;
    } else {
        let _ = store.fetch_all(op).await;
    }
    Ok(store.snapshot())
}

/// Places a sales order; the backend prices the lines and returns the
/// full order, which is appended to the collection.
#[tauri::command]
pub async fn place_sales_order(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    draft: PlaceSalesOrder,
) -> Result<SalesOrder, CommandError> {
    validation::check(validation::validate_sales_order(&draft))?;

    let client = api.api.clone();
    resources
        .sales_orders
        .create(move || async move {
            client
                .sales_orders()
                .place(&draft)
                .await
                .map_err(|err| err.user_message("Failed to place order"))
        })
        .await
        .map_err(CommandError::request_failed)
}

/// Ships a pending order, then refetches the collection.
#[tauri::command]
pub async fn ship_sales_order(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    id: i64,
) -> Result<ResourceState<SalesOrder>, CommandError> {
    debug!(id, "ship_sales_order command");
    let action_client = api.api.clone();
    let fetch_client = api.api.clone();

    resources
        .sales_orders
        .act_and_refresh(
            move || async move {
                action_client
                    .sales_orders()
                    .ship(id)
                    .await
                    .map_err(|err| err.user_message("Failed to ship order"))
            },
            move || async move {
                fetch_client
                    .sales_orders()
                    .fetch_all()
                    .await
                    .map_err(|err| err.user_message("Failed to fetch sales orders"))
            },
        )
        .await
        .map_err(CommandError::request_failed)?;

    Ok(resources.sales_orders.snapshot())
}

/// Records the buyer's payment on a shipped order, then refetches.
#[tauri::command]
pub async fn pay_sales_order(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    id: i64,
    payment: Payment,
) -> Result<ResourceState<SalesOrder>, CommandError> {
    debug!(id, "pay_sales_order command");
    validation::check(validation::validate_payment(&payment))?;

    let action_client = api.api.clone();
    let fetch_client = api.api.clone();

    resources
        .sales_orders
        .act_and_refresh(
            move || async move {
                action_client
                    .sales_orders()
                    .process_payment(id, &payment)
                    .await
                    .map_err(|err| err.user_message("Failed to process payment"))
            },
            move || async move {
                fetch_client
                    .sales_orders()
                    .fetch_all()
                    .await
                    .map_err(|err| err.user_message("Failed to fetch sales orders"))
            },
        )
        .await
        .map_err(CommandError::request_failed)?;

    Ok(resources.sales_orders.snapshot())
}

/// Manual status override; the response replaces the order in place.
#[tauri::command]
pub async fn update_sales_order_status(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    id: i64,
    status: SalesStatus,
) -> Result<SalesOrder, CommandError> {
    debug!(id, %status, "update_sales_order_status command");
    let client = api.api.clone();
    resources
        .sales_orders
        .update(move || async move {
            client
                .sales_orders()
                .update_status(id, status)
                .await
                .map_err(|err| err.user_message("Failed to update order status"))
        })
        .await
        .map_err(CommandError::request_failed)
}

/// Case-insensitive search over the cached orders: matches the order id
/// or the buyer store's name, resolved by linear lookup against the
/// stores collection.
#[tauri::command]
pub fn search_sales_orders(resources: State<'_, ResourcesState>, query: String) -> Vec<SalesOrder> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return resources.sales_orders.with_state(|state| state.items.clone());
    }

    resources.sales_orders.with_state(|orders| {
        resources.stores.with_state(|stores| {
            orders
                .items
                .iter()
                .filter(|order| {
                    let buyer_name = stores
                        .find(order.buyer_store_id)
                        .map(|store| store.store_name.to_lowercase())
                        .unwrap_or_default();
                    buyer_name.contains(&query) || order.id.to_string().contains(&query)
                })
                .cloned()
                .collect()
        })
    })
}

/// Pure validation for the sales-order modal.
#[tauri::command]
pub fn validate_sales_order_draft(draft: PlaceSalesOrder) -> FieldErrors {
    validation::validate_sales_order(&draft)
}
