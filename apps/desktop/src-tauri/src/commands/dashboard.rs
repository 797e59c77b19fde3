//! # Dashboard Commands
//!
//! Read-only aggregations over the already-fetched collections. Nothing
//! here talks to the network: the dashboard summarizes whatever the
//! resource stores currently hold, and the role-specific dashboard
//! components pick the tiles they care about.
//!
//! These are display sums over fetched server-computed totals — the
//! client still never derives authoritative values.

use meridian_core::{OrderStatus, PurchaseOrder, SalesOrder, SalesStatus};
use serde::Serialize;
use tauri::State;
use ts_rs::TS;

use crate::state::ResourcesState;

/// Counts and totals for the dashboard tiles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DashboardMetrics {
    pub product_count: usize,
    pub category_count: usize,
    pub supplier_count: usize,
    pub store_count: usize,
    pub warehouse_count: usize,
    /// Purchase orders not yet in a terminal state.
    pub open_purchase_orders: usize,
    pub received_purchase_orders: usize,
    /// Sum of server-computed purchase totals.
    pub purchase_total: f64,
    pub pending_sales_orders: usize,
    pub shipped_sales_orders: usize,
    /// Sum of server-computed sales totals.
    pub sales_total: f64,
}

/// Aggregates the purchase-order side of the metrics.
fn purchase_metrics(orders: &[PurchaseOrder]) -> (usize, usize, f64) {
    let open = orders.iter().filter(|o| !o.status.is_terminal()).count();
    let received = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Received)
        .count();
    let total = orders.iter().map(|o| o.total_amount).sum();
    (open, received, total)
}

/// Aggregates the sales-order side of the metrics.
fn sales_metrics(orders: &[SalesOrder]) -> (usize, usize, f64) {
    let pending = orders
        .iter()
        .filter(|o| o.status == SalesStatus::Pending)
        .count();
    let shipped = orders
        .iter()
        .filter(|o| o.status == SalesStatus::Shipped)
        .count();
    let total = orders.iter().map(|o| o.total_amount).sum();
    (pending, shipped, total)
}

/// Builds the dashboard tile numbers from the cached collections.
#[tauri::command]
pub fn dashboard_metrics(resources: State<'_, ResourcesState>) -> DashboardMetrics {
    let (open_purchase_orders, received_purchase_orders, purchase_total) = resources
        .purchase_orders
        .with_state(|state| purchase_metrics(&state.items));
    let (pending_sales_orders, shipped_sales_orders, sales_total) = resources
        .sales_orders
        .with_state(|state| sales_metrics(&state.items));

    DashboardMetrics {
        product_count: resources.products.with_state(|state| state.items.len()),
        category_count: resources.categories.with_state(|state| state.items.len()),
        supplier_count: resources.suppliers.with_state(|state| state.items.len()),
        store_count: resources.stores.with_state(|state| state.items.len()),
        warehouse_count: resources.warehouses.with_state(|state| state.items.len()),
        open_purchase_orders,
        received_purchase_orders,
        purchase_total,
        pending_sales_orders,
        shipped_sales_orders,
        sales_total,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn purchase_order(id: i64, status: OrderStatus, total: f64) -> PurchaseOrder {
        PurchaseOrder {
            id,
            supplier_id: 1,
            supplier_name: None,
            order_date: Utc.with_ymd_and_hms(2024, 8, 1, 9, 0, 0).unwrap(),
            expected_delivery_date: NaiveDate::from_ymd_opt(2024, 8, 15).unwrap(),
            status,
            total_amount: total,
            order_items: vec![],
        }
    }

    fn sales_order(id: i64, status: SalesStatus, total: f64) -> SalesOrder {
        SalesOrder {
            id,
            buyer_store_id: 1,
            warehouse_id: 1,
            order_date: Utc.with_ymd_and_hms(2024, 8, 1, 9, 0, 0).unwrap(),
            status,
            total_amount: total,
            order_items: vec![],
        }
    }

    #[test]
    fn test_purchase_metrics() {
        let orders = vec![
            purchase_order(1, OrderStatus::Pending, 5400.0),
            purchase_order(2, OrderStatus::Received, 2100.0),
            purchase_order(3, OrderStatus::Cancelled, 999.0),
        ];
        let (open, received, total) = purchase_metrics(&orders);
        assert_eq!(open, 1);
        assert_eq!(received, 1);
        assert!((total - 8499.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sales_metrics() {
        let orders = vec![
            sales_order(1, SalesStatus::Pending, 100.0),
            sales_order(2, SalesStatus::Shipped, 250.0),
            sales_order(3, SalesStatus::Shipped, 250.0),
            sales_order(4, SalesStatus::Cancelled, 75.0),
        ];
        let (pending, shipped, total) = sales_metrics(&orders);
        assert_eq!(pending, 1);
        assert_eq!(shipped, 2);
        assert!((total - 675.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_collections_are_zero() {
        let (open, received, total) = purchase_metrics(&[]);
        assert_eq!((open, received), (0, 0));
        assert_eq!(total, 0.0);
    }
}
