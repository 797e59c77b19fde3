//! # Resources State
//!
//! One [`ResourceStore`] per backend resource, plus the two non-uniform
//! slices (reports and forecasting). Together these are the whole global
//! state tree, as independent sub-states.

use std::sync::Mutex;

use meridian_core::{
    Category, InventoryRecord, Product, PurchaseOrder, SalesOrder, Store, Supplier, Warehouse,
};
use meridian_state::{ForecastState, ReportState, ResourceStore};

/// Tauri-managed per-resource stores.
#[derive(Debug, Clone)]
pub struct ResourcesState {
    pub categories: ResourceStore<Category>,
    pub stores: ResourceStore<Store>,
    pub products: ResourceStore<Product>,
    pub suppliers: ResourceStore<Supplier>,
    pub warehouses: ResourceStore<Warehouse>,
    pub purchase_orders: ResourceStore<PurchaseOrder>,
    pub sales_orders: ResourceStore<SalesOrder>,
    /// Stock records for the currently selected warehouse. Switching
    /// warehouses refreshes this store wholesale.
    pub inventory: ResourceStore<InventoryRecord>,
}

impl ResourcesState {
    /// Creates every store empty and idle.
    pub fn new() -> Self {
        ResourcesState {
            categories: ResourceStore::new("categories"),
            stores: ResourceStore::new("stores"),
            products: ResourceStore::new("products"),
            suppliers: ResourceStore::new("suppliers"),
            warehouses: ResourceStore::new("warehouses"),
            purchase_orders: ResourceStore::new("purchase-orders"),
            sales_orders: ResourceStore::new("sales-orders"),
            inventory: ResourceStore::new("inventory"),
        }
    }
}

impl Default for ResourcesState {
    fn default() -> Self {
        Self::new()
    }
}

/// Tauri-managed report slice.
#[derive(Debug, Default)]
pub struct ReportStore {
    state: Mutex<ReportState>,
}

impl ReportStore {
    /// Executes a function with read access to the report state.
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ReportState) -> R,
    {
        let state = self.state.lock().expect("report state mutex poisoned");
        f(&state)
    }

    /// Executes a function with write access to the report state.
    pub fn with_state_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ReportState) -> R,
    {
        let mut state = self.state.lock().expect("report state mutex poisoned");
        f(&mut state)
    }
}

/// Tauri-managed forecasting slice.
#[derive(Debug, Default)]
pub struct ForecastStore {
    state: Mutex<ForecastState>,
}

impl ForecastStore {
    /// Executes a function with read access to the forecast state.
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ForecastState) -> R,
    {
        let state = self.state.lock().expect("forecast state mutex poisoned");
        f(&state)
    }

    /// Executes a function with write access to the forecast state.
    pub fn with_state_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ForecastState) -> R,
    {
        let mut state = self.state.lock().expect("forecast state mutex poisoned");
        f(&mut state)
    }
}
