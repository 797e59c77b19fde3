//! # Roles & View Capability Table
//!
//! Role-based navigation for the view shell.
//!
//! ## How Routing Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Role-Gated Navigation                              │
//! │                                                                         │
//! │  Session { role: SupplyChainCoordinator }                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  visible_views(role) ── filters ActiveView::ALL through allows()        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  [Dashboard, Suppliers, PurchaseOrders]   ◄── sidebar entries           │
//! │                                                                         │
//! │  set_active_view(Categories) ── allows()? NO ──► rejected               │
//! │  set_active_view(Suppliers)  ── allows()? YES ─► page renders           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why a Capability Table?
//! Allow-lists as string tags would be matched at runtime; here both
//! sides are enums and the table is an exhaustive `match`, so adding a
//! view without assigning roles is a compile error.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Role
// =============================================================================

/// A user capability tag, carried in the session and on the wire.
///
/// Wire strings keep the backend's `ROLE_` prefix convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Role {
    #[serde(rename = "ROLE_BUSINESS_OWNER")]
    BusinessOwner,
    #[serde(rename = "ROLE_INVENTORY_MANAGER")]
    InventoryManager,
    #[serde(rename = "ROLE_SUPPLY_CHAIN_COORDINATOR")]
    SupplyChainCoordinator,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl Role {
    /// Every role, for registration dropdowns.
    pub const ALL: [Role; 4] = [
        Role::BusinessOwner,
        Role::InventoryManager,
        Role::SupplyChainCoordinator,
        Role::Admin,
    ];

    /// Human-readable label for headers and the registration form.
    pub fn label(self) -> &'static str {
        match self {
            Role::BusinessOwner => "Business Owner",
            Role::InventoryManager => "Inventory Manager",
            Role::SupplyChainCoordinator => "Supply Chain Coordinator",
            Role::Admin => "Administrator",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::BusinessOwner => "ROLE_BUSINESS_OWNER",
            Role::InventoryManager => "ROLE_INVENTORY_MANAGER",
            Role::SupplyChainCoordinator => "ROLE_SUPPLY_CHAIN_COORDINATOR",
            Role::Admin => "ROLE_ADMIN",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROLE_BUSINESS_OWNER" => Ok(Role::BusinessOwner),
            "ROLE_INVENTORY_MANAGER" => Ok(Role::InventoryManager),
            "ROLE_SUPPLY_CHAIN_COORDINATOR" => Ok(Role::SupplyChainCoordinator),
            "ROLE_ADMIN" => Ok(Role::Admin),
            other => Err(format!("unknown role: '{}'", other)),
        }
    }
}

// =============================================================================
// Active View
// =============================================================================

/// The single selector determining which management page or dashboard is
/// currently rendered.
///
/// View selection is in-memory only: there is no routing and no
/// deep-linking, and the active view resets to the dashboard on reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum ActiveView {
    Dashboard,
    Stores,
    Categories,
    Products,
    Suppliers,
    Warehouses,
    PurchaseOrders,
    SalesOrders,
    Reports,
    Forecasting,
}

impl ActiveView {
    /// Every view, in sidebar order.
    pub const ALL: [ActiveView; 10] = [
        ActiveView::Dashboard,
        ActiveView::Stores,
        ActiveView::Categories,
        ActiveView::Products,
        ActiveView::Suppliers,
        ActiveView::Warehouses,
        ActiveView::PurchaseOrders,
        ActiveView::SalesOrders,
        ActiveView::Reports,
        ActiveView::Forecasting,
    ];

    /// Sidebar label for this view.
    pub fn label(self) -> &'static str {
        match self {
            ActiveView::Dashboard => "Dashboard",
            ActiveView::Stores => "Stores",
            ActiveView::Categories => "Categories",
            ActiveView::Products => "Products",
            ActiveView::Suppliers => "Suppliers",
            ActiveView::Warehouses => "Warehouses",
            ActiveView::PurchaseOrders => "Purchase Orders",
            ActiveView::SalesOrders => "Sales Orders",
            ActiveView::Reports => "Reports",
            ActiveView::Forecasting => "Forecasting",
        }
    }

    /// The capability table: which roles may open this view.
    ///
    /// Admin sees everything. The dashboard is universal. The rest
    /// mirror the responsibilities of each role: owners run stores and
    /// read the business numbers, inventory managers run the catalog and
    /// warehouses, supply-chain coordinators deal with suppliers and
    /// purchasing.
    pub fn allows(self, role: Role) -> bool {
        if role == Role::Admin {
            return true;
        }
        match self {
            ActiveView::Dashboard => true,
            ActiveView::Stores => matches!(role, Role::BusinessOwner),
            ActiveView::Categories => {
                matches!(role, Role::InventoryManager | Role::BusinessOwner)
            }
            ActiveView::Products => {
                matches!(role, Role::InventoryManager | Role::BusinessOwner)
            }
            ActiveView::Suppliers => matches!(role, Role::SupplyChainCoordinator),
            ActiveView::Warehouses => matches!(role, Role::InventoryManager),
            ActiveView::PurchaseOrders => {
                matches!(role, Role::InventoryManager | Role::SupplyChainCoordinator)
            }
            ActiveView::SalesOrders => {
                matches!(role, Role::BusinessOwner | Role::InventoryManager)
            }
            ActiveView::Reports => {
                matches!(role, Role::InventoryManager | Role::BusinessOwner)
            }
            ActiveView::Forecasting => matches!(role, Role::BusinessOwner),
        }
    }
}

impl Default for ActiveView {
    fn default() -> Self {
        ActiveView::Dashboard
    }
}

/// Returns the views the given role may navigate to, in sidebar order.
pub fn visible_views(role: Role) -> Vec<ActiveView> {
    ActiveView::ALL
        .into_iter()
        .filter(|view| view.allows(role))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_strings() {
        assert_eq!(
            serde_json::to_string(&Role::SupplyChainCoordinator).unwrap(),
            "\"ROLE_SUPPLY_CHAIN_COORDINATOR\""
        );
        let parsed: Role = serde_json::from_str("\"ROLE_BUSINESS_OWNER\"").unwrap();
        assert_eq!(parsed, Role::BusinessOwner);
    }

    #[test]
    fn test_role_from_str_rejects_unknown() {
        assert!("ROLE_INVENTORY_MANAGER".parse::<Role>().is_ok());
        assert!("ROLE_WAREHOUSE_GNOME".parse::<Role>().is_err());
    }

    #[test]
    fn test_coordinator_sees_suppliers_not_categories() {
        let views = visible_views(Role::SupplyChainCoordinator);
        assert!(views.contains(&ActiveView::Suppliers));
        assert!(!views.contains(&ActiveView::Categories));
    }

    #[test]
    fn test_admin_sees_all_views() {
        assert_eq!(visible_views(Role::Admin).len(), ActiveView::ALL.len());
    }

    #[test]
    fn test_dashboard_visible_to_every_role() {
        for role in Role::ALL {
            assert!(ActiveView::Dashboard.allows(role), "{role} lost the dashboard");
        }
    }

    #[test]
    fn test_owner_views() {
        let views = visible_views(Role::BusinessOwner);
        assert!(views.contains(&ActiveView::Stores));
        assert!(views.contains(&ActiveView::Forecasting));
        assert!(!views.contains(&ActiveView::Warehouses));
        assert!(!views.contains(&ActiveView::Suppliers));
    }
}
