//! # Report Commands
//!
//! The reports page: inventory summary (the page's primary load, with
//! the full lifecycle), plus the purchase-order history and low-stock
//! sections which render as they land.

use meridian_core::{PurchaseOrderFilter, DEFAULT_LOW_STOCK_THRESHOLD};
use meridian_state::ReportState;
use tauri::State;
use tracing::debug;

use crate::error::CommandError;
use crate::state::{ApiState, ReportStore};

/// Fetches the inventory summary (only when idle; `force` bypasses).
#[tauri::command]
pub async fn fetch_inventory_summary(
    api: State<'_, ApiState>,
    reports: State<'_, ReportStore>,
    force: Option<bool>,
) -> Result<ReportState, CommandError> {
    debug!(force = force.unwrap_or(false), "fetch_inventory_summary command");

    let should_fetch = reports.with_state_mut(|state| {
        if state.status.should_fetch() || force.unwrap_or(false) {
            state.summary_pending();
            true
        } else {
            false
        }
    });

    if should_fetch {
        match api.api.reports().inventory_summary().await {
            Ok(summary) => reports.with_state_mut(|state| state.summary_fulfilled(summary)),
            Err(err) => {
                let message = err.user_message("Failed to fetch summary");
                reports.with_state_mut(|state| state.summary_rejected(message));
            }
        }
    }

    Ok(reports.with_state(|state| state.clone()))
}

/// Fetches the purchase-order history with server-side filters.
#[tauri::command]
pub async fn fetch_purchase_order_history(
    api: State<'_, ApiState>,
    reports: State<'_, ReportStore>,
    filter: PurchaseOrderFilter,
) -> Result<ReportState, CommandError> {
    debug!(?filter, "fetch_purchase_order_history command");
    let orders = api
        .api
        .reports()
        .purchase_order_history(&filter)
        .await
        .map_err(|err| CommandError::request_failed(err.user_message("Failed to fetch PO history")))?;

    reports.with_state_mut(|state| state.history_fulfilled(orders));
    Ok(reports.with_state(|state| state.clone()))
}

/// Fetches the low-stock rows. Without an explicit threshold the client
/// default applies.
#[tauri::command]
pub async fn fetch_low_stock_report(
    api: State<'_, ApiState>,
    reports: State<'_, ReportStore>,
    threshold: Option<i64>,
) -> Result<ReportState, CommandError> {
    let threshold = threshold.unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD);
    debug!(threshold, "fetch_low_stock_report command");

    let items = api
        .api
        .reports()
        .low_stock(Some(threshold))
        .await
        .map_err(|err| {
            CommandError::request_failed(err.user_message("Failed to fetch low stock report"))
        })?;

    reports.with_state_mut(|state| state.low_stock_fulfilled(items));
    Ok(reports.with_state(|state| state.clone()))
}
