//! # Domain Types
//!
//! Core domain types used throughout the Meridian ERP client.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  PurchaseOrder  │   │   SalesOrder    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  id (i64)       │   │  id (i64)       │       │
//! │  │  sku            │   │  supplier_id    │   │  buyer_store_id │       │
//! │  │  category_id    │   │  status         │   │  status         │       │
//! │  │  supplier_id    │   │  total_amount   │   │  total_amount   │       │
//! │  │  unit_price     │   │  order_items    │   │  order_items    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   OrderStatus   │   │   SalesStatus   │   │     Session     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Pending        │   │  Pending        │   │  token          │       │
//! │  │  Received …     │   │  Shipped …      │   │  role, email    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Pattern
//! Every persisted entity has a numeric `id` assigned by the backend on
//! creation. The client never mints identities; `New*` payload types omit
//! the `id` field entirely (plus any other server-computed fields).
//!
//! ## Server-Computed Fields
//! `total_amount`, order `status`, `order_date`, and `is_verified` are
//! owned by the backend. The client displays them verbatim and refetches
//! after actions that change them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::roles::Role;

// =============================================================================
// Entity Identity
// =============================================================================

/// A backend-managed record with a numeric identity.
///
/// Implemented by every resource that lives in a collection store, so the
/// generic resource controller can replace/remove records by id.
pub trait Entity {
    /// The backend-assigned identifier.
    fn id(&self) -> i64;
}

// =============================================================================
// Category
// =============================================================================

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Entity for Category {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Create payload for a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewCategory {
    pub name: String,
}

// =============================================================================
// Store
// =============================================================================

/// A retail store participating in the ERP network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Store {
    pub id: i64,
    pub store_name: String,
    pub store_registration_number: String,
    pub tax_id: String,
    pub operational_details: String,
    /// Set by the backend once the registration paperwork checks out.
    pub is_verified: bool,
}

impl Entity for Store {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Create payload for a store.
///
/// Omits `is_verified`: verification is a backend decision, never part of
/// the submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewStore {
    pub store_name: String,
    pub store_registration_number: String,
    pub tax_id: String,
    pub operational_details: String,
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// `category_id` and `supplier_id` are foreign keys resolved client-side
/// by linear lookup against the sibling category/supplier collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    pub id: i64,
    /// Stock Keeping Unit - business identifier.
    pub sku: String,
    pub name: String,
    pub description: String,
    pub category_id: i64,
    pub supplier_id: i64,
    /// Unit price as sent by the backend. The client never does money
    /// arithmetic on it.
    pub unit_price: f64,
}

impl Entity for Product {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Product {
    /// Case-insensitive substring match over the searchable display
    /// fields (name and SKU).
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.sku.to_lowercase().contains(&query)
    }
}

/// Create payload for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub category_id: i64,
    pub supplier_id: i64,
    pub unit_price: f64,
}

// =============================================================================
// Supplier
// =============================================================================

/// An upstream supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    /// Endpoint of the supplier's own ordering API, if they expose one.
    pub api_url: String,
}

impl Entity for Supplier {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Create payload for a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewSupplier {
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub api_url: String,
}

// =============================================================================
// Warehouse
// =============================================================================

/// A warehouse holding inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Warehouse {
    pub id: i64,
    pub name: String,
    pub location: String,
}

impl Entity for Warehouse {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Create payload for a warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewWarehouse {
    pub name: String,
    pub location: String,
}

// =============================================================================
// Purchase Orders
// =============================================================================

/// Status of a purchase order, as reported by the backend.
///
/// The client never transitions these locally: receive/pay actions hit
/// their endpoints and then refetch the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
    Received,
}

impl OrderStatus {
    /// Whether goods for this order can still be received into a
    /// warehouse.
    pub fn can_receive(self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Confirmed | OrderStatus::Shipped | OrderStatus::Delivered
        )
    }

    /// Whether the order has reached a final state.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Cancelled | OrderStatus::Returned | OrderStatus::Received)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Returned => "RETURNED",
            OrderStatus::Received => "RECEIVED",
        };
        f.write_str(s)
    }
}

/// A line item on a purchase order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PurchaseOrderItem {
    /// Absent until the backend persists the line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
    /// Denormalized display name, when the backend joins it in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

/// A purchase order placed against a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PurchaseOrder {
    pub id: i64,
    pub supplier_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    /// Server timestamp of order placement.
    #[ts(as = "String")]
    pub order_date: DateTime<Utc>,
    #[ts(as = "String")]
    pub expected_delivery_date: NaiveDate,
    pub status: OrderStatus,
    /// Server-computed; the client never sums line items itself.
    pub total_amount: f64,
    pub order_items: Vec<PurchaseOrderItem>,
}

impl Entity for PurchaseOrder {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Line item in a purchase-order create payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewPurchaseOrderItem {
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
}

/// Create payload for a purchase order.
///
/// `order_date`, `status`, and `total_amount` are server-computed and
/// therefore absent here. `expected_delivery_date` is optional only while
/// the form is being drafted; validation rejects `None` before submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewPurchaseOrder {
    pub supplier_id: i64,
    #[ts(as = "Option<String>")]
    pub expected_delivery_date: Option<NaiveDate>,
    pub order_items: Vec<NewPurchaseOrderItem>,
}

// =============================================================================
// Sales Orders
// =============================================================================

/// Status of a sales order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum SalesStatus {
    Pending,
    Shipped,
    Cancelled,
}

impl SalesStatus {
    /// Only pending orders can be shipped.
    pub fn can_ship(self) -> bool {
        matches!(self, SalesStatus::Pending)
    }

    /// Payment is collected once the order has shipped.
    pub fn can_pay(self) -> bool {
        matches!(self, SalesStatus::Shipped)
    }
}

impl std::fmt::Display for SalesStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SalesStatus::Pending => "PENDING",
            SalesStatus::Shipped => "SHIPPED",
            SalesStatus::Cancelled => "CANCELLED",
        };
        f.write_str(s)
    }
}

/// A line item on a sales order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SalesOrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub product_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    pub quantity: i64,
    /// Priced by the backend from the catalog at placement time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
}

/// A sales order: a buyer store purchasing stock out of a warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SalesOrder {
    pub id: i64,
    pub buyer_store_id: i64,
    pub warehouse_id: i64,
    #[ts(as = "String")]
    pub order_date: DateTime<Utc>,
    pub status: SalesStatus,
    pub total_amount: f64,
    pub order_items: Vec<SalesOrderItem>,
}

impl Entity for SalesOrder {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Line item in a sales-order place payload. Pricing is the backend's
/// job, so only the product and quantity are sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewSalesOrderItem {
    pub product_id: i64,
    pub quantity: i64,
}

/// Place payload for a sales order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PlaceSalesOrder {
    pub buyer_store_id: i64,
    pub warehouse_id: i64,
    pub order_items: Vec<NewSalesOrderItem>,
}

// =============================================================================
// Inventory
// =============================================================================

/// A stock record: how much of one product one warehouse holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InventoryRecord {
    pub id: i64,
    pub product_id: i64,
    pub warehouse_id: i64,
    pub quantity: i64,
}

impl Entity for InventoryRecord {
    fn id(&self) -> i64 {
        self.id
    }
}

// =============================================================================
// Payments
// =============================================================================

/// Payment details submitted against an order's payment endpoint.
///
/// The transaction id comes from the external payment processor; the
/// client just forwards it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Payment {
    pub transaction_id: String,
    pub payment_method: String,
}

// =============================================================================
// Reports
// =============================================================================

/// Aggregate inventory figures from `/reports/inventory-summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InventorySummary {
    pub total_products: i64,
    pub total_stock_quantity: i64,
    pub total_stock_value: f64,
    pub low_stock_count: i64,
}

/// One row of the low-stock report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LowStockItem {
    pub product_id: i64,
    pub product_name: String,
    pub sku: String,
    pub warehouse_id: i64,
    pub quantity: i64,
    pub threshold: i64,
}

/// Server-side filter for the purchase-order history report.
/// All fields optional; `None` means "don't filter on this".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PurchaseOrderFilter {
    #[ts(as = "Option<String>")]
    pub start_date: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub end_date: Option<NaiveDate>,
    pub supplier_id: Option<i64>,
    pub status: Option<OrderStatus>,
}

// =============================================================================
// Forecasting
// =============================================================================

/// A historical sales record consumed by the forecasting sidecar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SalesRecord {
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub store_id: i64,
    pub product_id: i64,
    pub category: String,
    pub region: String,
    pub inventory_level: f64,
    pub units_sold: f64,
    pub units_ordered: f64,
    pub price: f64,
    pub discount: f64,
    pub weather_condition: String,
    pub holiday_promotion: i64,
    pub competitor_pricing: f64,
    pub seasonality: String,
}

/// Date-range filter for fetching historical sales records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SalesRecordFilter {
    #[ts(as = "Option<String>")]
    pub start_date: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub end_date: Option<NaiveDate>,
}

/// Numeric predictions returned by the forecasting sidecar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ForecastResponse {
    pub predictions: Vec<f64>,
}

// =============================================================================
// Authentication
// =============================================================================

/// Registration payload for `/auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RegisterRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Credentials payload for `/auth/authenticate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AuthenticationRequest {
    pub email: String,
    pub password: String,
}

/// Backend response to a successful register/authenticate call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AuthenticationResponse {
    pub token: String,
    pub role: Role,
    /// Display name, when the backend includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The authenticated user's session, as held in memory and persisted to
/// the session file.
///
/// ## Lifecycle
/// - Written on successful login (token + role from the response, email
///   from the request).
/// - Restored at startup from persisted storage.
/// - Cleared on logout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_is_camel_case() {
        let product = Product {
            id: 7,
            sku: "SKU-7".to_string(),
            name: "Desk Lamp".to_string(),
            description: String::new(),
            category_id: 2,
            supplier_id: 3,
            unit_price: 19.99,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["categoryId"], 2);
        assert_eq!(json["supplierId"], 3);
        assert_eq!(json["unitPrice"], 19.99);
    }

    #[test]
    fn test_order_status_wire_strings() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Received).unwrap(),
            "\"RECEIVED\""
        );
        let parsed: OrderStatus = serde_json::from_str("\"PENDING\"").unwrap();
        assert_eq!(parsed, OrderStatus::Pending);
    }

    #[test]
    fn test_order_status_transitions() {
        assert!(OrderStatus::Pending.can_receive());
        assert!(OrderStatus::Shipped.can_receive());
        assert!(!OrderStatus::Received.can_receive());
        assert!(OrderStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_sales_status_transitions() {
        assert!(SalesStatus::Pending.can_ship());
        assert!(!SalesStatus::Shipped.can_ship());
        assert!(SalesStatus::Shipped.can_pay());
        assert!(!SalesStatus::Cancelled.can_pay());
    }

    #[test]
    fn test_product_matches_query() {
        let product = Product {
            id: 1,
            sku: "KB-MECH-01".to_string(),
            name: "Mechanical Keyboard".to_string(),
            description: String::new(),
            category_id: 1,
            supplier_id: 1,
            unit_price: 85.0,
        };
        assert!(product.matches_query("mech"));
        assert!(product.matches_query("kb-"));
        assert!(!product.matches_query("mouse"));
    }

    #[test]
    fn test_new_purchase_order_serializes_date() {
        let order = NewPurchaseOrder {
            supplier_id: 4,
            expected_delivery_date: NaiveDate::from_ymd_opt(2024, 8, 20),
            order_items: vec![NewPurchaseOrderItem {
                product_id: 1,
                quantity: 10,
                unit_price: 2.5,
            }],
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["expectedDeliveryDate"], "2024-08-20");
        assert_eq!(json["orderItems"][0]["productId"], 1);
    }

    #[test]
    fn test_session_round_trip() {
        let session = Session {
            token: "jwt".to_string(),
            role: Role::InventoryManager,
            email: "im@example.com".to_string(),
            name: Some("Alex Doe".to_string()),
        };
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
