//! # Purchase Order Commands
//!
//! Placement plus the receive/pay lifecycle.
//!
//! ## Refetch After Actions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Receive Flow                                           │
//! │                                                                         │
//! │  invoke('receive_purchase_order', { id: 42, warehouseId: 3 })           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  POST /purchase-orders/42/receive?warehouseId=3     (empty response)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET /purchase-orders            ◄── status + totals are server-        │
//! │       │                              computed; refetching the whole     │
//! │       ▼                              collection is the only correct     │
//! │  snapshot with RECEIVED order        way to observe the new state       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Payment follows the same shape; both also update warehouse stock
//! server-side, which the inventory page sees on its next fetch.

use meridian_core::validation;
use meridian_core::{FieldErrors, NewPurchaseOrder, OrderStatus, Payment, PurchaseOrder};
use meridian_state::ResourceState;
use tauri::State;
use tracing::debug;

use crate::error::CommandError;
use crate::state::{ApiState, ResourcesState};

/// Fetches the purchase-order collection (only when idle; `force`
/// bypasses).
#[tauri::command]
pub async fn fetch_purchase_orders(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    force: Option<bool>,
) -> Result<ResourceState<PurchaseOrder>, CommandError> {
    debug!(force = force.unwrap_or(false), "fetch_purchase_orders command");
    let client = api.api.clone();
    let op = move || async move {
        client
            .purchase_orders()
            .fetch_all()
            .await
            .map_err(|err| err.user_message("Failed to fetch purchase orders"))
    };

    let store = &resources.purchase_orders;
    if force.unwrap_or(false) {
        let _ = store.refresh(op).await;
    } else {
        let _ = store.fetch_all(op).await;
    }
    Ok(store.snapshot())
}

/// Places a purchase order. The server computes order date, status, and
/// total; the returned order is appended to the collection.
#[tauri::command]
pub async fn create_purchase_order(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    draft: NewPurchaseOrder,
) -> Result<PurchaseOrder, CommandError> {
    validation::check(validation::validate_purchase_order(&draft))?;

    let client = api.api.clone();
    resources
        .purchase_orders
        .create(move || async move {
            client
                .purchase_orders()
                .create(&draft)
                .await
                .map_err(|err| err.user_message("Failed to create purchase order"))
        })
        .await
        .map_err(CommandError::request_failed)
}

/// Receives a delivered order into a warehouse, then refetches the
/// collection for the server-computed status.
#[tauri::command]
pub async fn receive_purchase_order(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    id: i64,
    warehouse_id: i64,
) -> Result<ResourceState<PurchaseOrder>, CommandError> {
    debug!(id, warehouse_id, "receive_purchase_order command");
    let action_client = api.api.clone();
    let fetch_client = api.api.clone();

    resources
        .purchase_orders
        .act_and_refresh(
            move || async move {
                action_client
                    .purchase_orders()
                    .receive(id, warehouse_id)
                    .await
                    .map_err(|err| err.user_message("Failed to receive order"))
            },
            move || async move {
                fetch_client
                    .purchase_orders()
                    .fetch_all()
                    .await
                    .map_err(|err| err.user_message("Failed to fetch purchase orders"))
            },
        )
        .await
        .map_err(CommandError::request_failed)?;

    Ok(resources.purchase_orders.snapshot())
}

/// Records a payment against an order, then refetches the collection.
#[tauri::command]
pub async fn pay_purchase_order(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    id: i64,
    payment: Payment,
) -> Result<ResourceState<PurchaseOrder>, CommandError> {
    debug!(id, "pay_purchase_order command");
    validation::check(validation::validate_payment(&payment))?;

    let action_client = api.api.clone();
    let fetch_client = api.api.clone();

    resources
        .purchase_orders
        .act_and_refresh(
            move || async move {
                action_client
                    .purchase_orders()
                    .make_payment(id, &payment)
                    .await
                    .map_err(|err| err.user_message("Failed to process payment"))
            },
            move || async move {
                fetch_client
                    .purchase_orders()
                    .fetch_all()
                    .await
                    .map_err(|err| err.user_message("Failed to fetch purchase orders"))
            },
        )
        .await
        .map_err(CommandError::request_failed)?;

    Ok(resources.purchase_orders.snapshot())
}

/// Manual status override; the response replaces the order in place.
#[tauri::command]
pub async fn update_purchase_order_status(
    api: State<'_, ApiState>,
    resources: State<'_, ResourcesState>,
    id: i64,
    status: OrderStatus,
) -> Result<PurchaseOrder, CommandError> {
    debug!(id, %status, "update_purchase_order_status command");
    let client = api.api.clone();
    resources
        .purchase_orders
        .update(move || async move {
            client
                .purchase_orders()
                .update_status(id, status)
                .await
                .map_err(|err| err.user_message("Failed to update order status"))
        })
        .await
        .map_err(CommandError::request_failed)
}

/// Pure validation for the purchase-order modal.
#[tauri::command]
pub fn validate_purchase_order_draft(draft: NewPurchaseOrder) -> FieldErrors {
    validation::validate_purchase_order(&draft)
}

/// Pure validation for the payment modal.
#[tauri::command]
pub fn validate_payment_draft(draft: Payment) -> FieldErrors {
    validation::validate_payment(&draft)
}
