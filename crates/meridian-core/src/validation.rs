//! # Validation Module
//!
//! Form validation for every create/edit modal in the client.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend form                                                │
//! │  ├── Runs these rules on every field change (via Tauri command)        │
//! │  └── Renders the field → message map inline                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command submit (Rust)                                        │
//! │  ├── THIS MODULE: same rules, enforced before any HTTP call            │
//! │  └── A payload with errors NEVER reaches the network                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend                                                      │
//! │  └── Business rule enforcement (source of truth)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each validator returns a [`FieldErrors`] map; an empty map means the
//! draft is submittable. Keys are wire-format field names so the frontend
//! can attach messages to inputs directly; order-line errors use indexed
//! keys (`item_quantity_0`) so each row renders its own message.

use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};
use crate::types::{
    AuthenticationRequest, NewCategory, NewProduct, NewPurchaseOrder, NewStore, NewSupplier,
    NewWarehouse, Payment, PlaceSalesOrder, RegisterRequest,
};
use crate::UNSELECTED_ID;

/// Field name → human-readable message.
pub type FieldErrors = BTreeMap<String, String>;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

// =============================================================================
// Helpers
// =============================================================================

fn require(errors: &mut FieldErrors, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field.to_string(), message.to_string());
    }
}

fn require_selected(errors: &mut FieldErrors, field: &str, id: i64, message: &str) {
    if id <= UNSELECTED_ID {
        errors.insert(field.to_string(), message.to_string());
    }
}

/// Loose email shape check: something before the `@`, something after
/// it, a dot in the domain part, no whitespace anywhere. Real
/// verification is the backend's problem.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

/// Converts a validator result into a `Result`, for the submit path.
pub fn check(errors: FieldErrors) -> CoreResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(errors))
    }
}

// =============================================================================
// Per-Resource Validators
// =============================================================================

/// Category: just a non-empty name.
pub fn validate_category(draft: &NewCategory) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, "name", &draft.name, "Category name is required.");
    errors
}

/// Store registration form.
pub fn validate_store(draft: &NewStore) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if draft.store_name.trim().is_empty() {
        errors.insert("storeName".to_string(), "Store name is required.".to_string());
    } else if draft.store_name.trim().len() < 3 {
        errors.insert(
            "storeName".to_string(),
            "Store name must be at least 3 characters long.".to_string(),
        );
    }
    require(
        &mut errors,
        "storeRegistrationNumber",
        &draft.store_registration_number,
        "Registration number is required.",
    );
    require(&mut errors, "taxId", &draft.tax_id, "Tax ID is required.");
    require(
        &mut errors,
        "operationalDetails",
        &draft.operational_details,
        "Operational details are required.",
    );
    errors
}

/// Product form: name, SKU, positive price, and both foreign keys.
pub fn validate_product(draft: &NewProduct) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, "name", &draft.name, "Product name is required.");
    require(&mut errors, "sku", &draft.sku, "SKU is required.");
    if draft.unit_price <= 0.0 {
        errors.insert(
            "unitPrice".to_string(),
            "Price must be greater than zero.".to_string(),
        );
    }
    require_selected(&mut errors, "categoryId", draft.category_id, "Please select a category.");
    require_selected(&mut errors, "supplierId", draft.supplier_id, "Please select a supplier.");
    errors
}

/// Supplier form.
pub fn validate_supplier(draft: &NewSupplier) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, "name", &draft.name, "Supplier name is required.");
    require(
        &mut errors,
        "contactPerson",
        &draft.contact_person,
        "Contact person is required.",
    );
    if draft.email.trim().is_empty() {
        errors.insert("email".to_string(), "Email is required.".to_string());
    } else if !is_valid_email(draft.email.trim()) {
        errors.insert("email".to_string(), "Email address is invalid.".to_string());
    }
    require(&mut errors, "phone", &draft.phone, "Phone number is required.");
    errors
}

/// Warehouse form.
pub fn validate_warehouse(draft: &NewWarehouse) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, "name", &draft.name, "Warehouse name is required.");
    require(&mut errors, "location", &draft.location, "Location is required.");
    errors
}

/// Purchase-order form: supplier, delivery date, and at least one
/// well-formed line item.
pub fn validate_purchase_order(draft: &NewPurchaseOrder) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require_selected(&mut errors, "supplierId", draft.supplier_id, "Supplier is required.");
    if draft.expected_delivery_date.is_none() {
        errors.insert(
            "expectedDeliveryDate".to_string(),
            "Expected delivery date is required.".to_string(),
        );
    }
    if draft.order_items.is_empty() {
        errors.insert("items".to_string(), "At least one item is required.".to_string());
    }
    for (index, item) in draft.order_items.iter().enumerate() {
        if item.product_id <= UNSELECTED_ID {
            errors.insert(format!("item_product_{index}"), "Product is required.".to_string());
        }
        if item.quantity <= 0 {
            errors.insert(
                format!("item_quantity_{index}"),
                "Quantity must be positive.".to_string(),
            );
        }
        if item.unit_price <= 0.0 {
            errors.insert(
                format!("item_price_{index}"),
                "Unit price must be greater than zero.".to_string(),
            );
        }
    }
    errors
}

/// Sales-order form: buyer store, source warehouse, and at least one
/// well-formed line item. Pricing is not validated here — the backend
/// prices lines from the catalog.
pub fn validate_sales_order(draft: &PlaceSalesOrder) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require_selected(&mut errors, "buyerStoreId", draft.buyer_store_id, "Buyer store is required.");
    require_selected(&mut errors, "warehouseId", draft.warehouse_id, "Warehouse is required.");
    if draft.order_items.is_empty() {
        errors.insert("items".to_string(), "At least one item is required.".to_string());
    }
    for (index, item) in draft.order_items.iter().enumerate() {
        if item.product_id <= UNSELECTED_ID {
            errors.insert(format!("item_product_{index}"), "Product is required.".to_string());
        }
        if item.quantity <= 0 {
            errors.insert(
                format!("item_quantity_{index}"),
                "Quantity must be positive.".to_string(),
            );
        }
    }
    errors
}

/// Payment form.
pub fn validate_payment(draft: &Payment) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(
        &mut errors,
        "transactionId",
        &draft.transaction_id,
        "Transaction ID is required.",
    );
    require(
        &mut errors,
        "paymentMethod",
        &draft.payment_method,
        "Payment method is required.",
    );
    errors
}

/// Registration form.
pub fn validate_registration(draft: &RegisterRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, "firstname", &draft.firstname, "First name is required.");
    require(&mut errors, "lastname", &draft.lastname, "Last name is required.");
    if draft.email.trim().is_empty() {
        errors.insert("email".to_string(), "Email is required.".to_string());
    } else if !is_valid_email(draft.email.trim()) {
        errors.insert("email".to_string(), "Email address is invalid.".to_string());
    }
    if draft.password.is_empty() {
        errors.insert("password".to_string(), "Password is required.".to_string());
    } else if draft.password.len() < MIN_PASSWORD_LEN {
        errors.insert(
            "password".to_string(),
            format!("Password must be at least {MIN_PASSWORD_LEN} characters long."),
        );
    }
    errors
}

/// Login form: both fields required, nothing more — the backend decides
/// whether the credentials are any good.
pub fn validate_login(draft: &AuthenticationRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, "email", &draft.email, "Email is required.");
    if draft.password.is_empty() {
        errors.insert("password".to_string(), "Password is required.".to_string());
    }
    errors
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NewPurchaseOrderItem, NewSalesOrderItem};
    use crate::Role;
    use chrono::NaiveDate;

    fn product_draft() -> NewProduct {
        NewProduct {
            sku: "SKU-1".to_string(),
            name: "Wireless Mouse".to_string(),
            description: String::new(),
            category_id: 1,
            supplier_id: 2,
            unit_price: 24.99,
        }
    }

    #[test]
    fn test_valid_product_has_no_errors() {
        assert!(validate_product(&product_draft()).is_empty());
    }

    #[test]
    fn test_product_zero_price_rejected() {
        let draft = NewProduct {
            unit_price: 0.0,
            ..product_draft()
        };
        let errors = validate_product(&draft);
        assert_eq!(errors["unitPrice"], "Price must be greater than zero.");
    }

    #[test]
    fn test_product_unselected_foreign_keys() {
        let draft = NewProduct {
            category_id: 0,
            supplier_id: 0,
            ..product_draft()
        };
        let errors = validate_product(&draft);
        assert_eq!(errors["categoryId"], "Please select a category.");
        assert_eq!(errors["supplierId"], "Please select a supplier.");
    }

    #[test]
    fn test_store_name_min_length() {
        let draft = NewStore {
            store_name: "AB".to_string(),
            store_registration_number: "REG-1".to_string(),
            tax_id: "TAX-1".to_string(),
            operational_details: "24/7".to_string(),
        };
        let errors = validate_store(&draft);
        assert_eq!(
            errors["storeName"],
            "Store name must be at least 3 characters long."
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("ops@acme.example"));
        assert!(!is_valid_email("ops@acme"));
        assert!(!is_valid_email("acme.example"));
        assert!(!is_valid_email("ops @acme.example"));
        assert!(!is_valid_email("@acme.example"));
    }

    #[test]
    fn test_supplier_invalid_email_message() {
        let draft = NewSupplier {
            name: "Tech Supplies Inc.".to_string(),
            contact_person: "Sam".to_string(),
            email: "not-an-email".to_string(),
            phone: "555-0100".to_string(),
            api_url: String::new(),
        };
        let errors = validate_supplier(&draft);
        assert_eq!(errors["email"], "Email address is invalid.");
    }

    #[test]
    fn test_purchase_order_requires_items() {
        let draft = NewPurchaseOrder {
            supplier_id: 3,
            expected_delivery_date: NaiveDate::from_ymd_opt(2024, 9, 1),
            order_items: vec![],
        };
        let errors = validate_purchase_order(&draft);
        assert_eq!(errors["items"], "At least one item is required.");
    }

    #[test]
    fn test_purchase_order_item_errors_are_indexed() {
        let draft = NewPurchaseOrder {
            supplier_id: 3,
            expected_delivery_date: NaiveDate::from_ymd_opt(2024, 9, 1),
            order_items: vec![
                NewPurchaseOrderItem {
                    product_id: 1,
                    quantity: 5,
                    unit_price: 2.0,
                },
                NewPurchaseOrderItem {
                    product_id: 0,
                    quantity: 0,
                    unit_price: 0.0,
                },
            ],
        };
        let errors = validate_purchase_order(&draft);
        assert!(!errors.contains_key("item_product_0"));
        assert_eq!(errors["item_product_1"], "Product is required.");
        assert_eq!(errors["item_quantity_1"], "Quantity must be positive.");
        assert_eq!(errors["item_price_1"], "Unit price must be greater than zero.");
    }

    #[test]
    fn test_sales_order_requires_selections() {
        let draft = PlaceSalesOrder {
            buyer_store_id: 0,
            warehouse_id: 0,
            order_items: vec![NewSalesOrderItem {
                product_id: 4,
                quantity: 2,
            }],
        };
        let errors = validate_sales_order(&draft);
        assert_eq!(errors["buyerStoreId"], "Buyer store is required.");
        assert_eq!(errors["warehouseId"], "Warehouse is required.");
    }

    #[test]
    fn test_payment_fields_required() {
        let draft = Payment {
            transaction_id: "  ".to_string(),
            payment_method: String::new(),
        };
        let errors = validate_payment(&draft);
        assert_eq!(errors["transactionId"], "Transaction ID is required.");
        assert_eq!(errors["paymentMethod"], "Payment method is required.");
    }

    #[test]
    fn test_registration_password_length() {
        let draft = RegisterRequest {
            firstname: "Alex".to_string(),
            lastname: "Doe".to_string(),
            email: "alex@example.com".to_string(),
            password: "short".to_string(),
            role: Role::BusinessOwner,
        };
        let errors = validate_registration(&draft);
        assert_eq!(
            errors["password"],
            "Password must be at least 8 characters long."
        );
    }

    #[test]
    fn test_check_converts_to_core_error() {
        let draft = NewProduct {
            unit_price: 0.0,
            ..product_draft()
        };
        let result = check(validate_product(&draft));
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }
}
