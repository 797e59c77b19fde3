//! # Meridian Desktop Library
//!
//! Core library for the Meridian ERP desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! meridian_desktop_lib/
//! ├── lib.rs              ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs          ◄─── State type exports
//! │   ├── api.rs          ◄─── HTTP clients (backend + sidecar)
//! │   ├── session.rs      ◄─── Session state + persisted file
//! │   ├── resources.rs    ◄─── Per-resource stores, reports, forecast
//! │   └── ui.rs           ◄─── Active view selector
//! ├── commands/
//! │   ├── auth.rs         ◄─── login / register / logout / restore
//! │   ├── navigation.rs   ◄─── role-gated sidebar + view selection
//! │   ├── <resource>.rs   ◄─── one module per management page
//! │   ├── reports.rs      ◄─── summary / history / low stock
//! │   ├── forecasting.rs  ◄─── two-step forecast run
//! │   └── dashboard.rs    ◄─── aggregations over cached collections
//! └── error.rs            ◄─── CommandError for the frontend
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Resolve Endpoint Configuration ───────────────────────────────────► │
//! │     • MERIDIAN_API_URL / MERIDIAN_FORECAST_URL, endpoints.toml,         │
//! │       or localhost defaults                                             │
//! │                                                                         │
//! │  3. Restore Persisted Session ────────────────────────────────────────► │
//! │     • session.json from the platform data dir                           │
//! │     • token primes the API client's bearer slot                         │
//! │                                                                         │
//! │  4. Initialize State Objects ─────────────────────────────────────────► │
//! │     • ApiState, SessionStore, ResourcesState (all idle),                │
//! │       ReportStore, ForecastStore, UiState (dashboard)                   │
//! │                                                                         │
//! │  5. Build & Run Tauri App ────────────────────────────────────────────► │
//! │     • Register all commands                                             │
//! │     • Manage state                                                      │
//! │     • Launch window                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use meridian_api::ApiConfig;
use meridian_state::SessionStorage;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use state::{ApiState, ForecastStore, ReportStore, ResourcesState, SessionStore, UiState};

/// Runs the Tauri application.
pub fn run() {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting Meridian ERP Desktop Application");

    // Build and run the Tauri app
    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            use tauri::Manager;

            // Resolve backend endpoints
            let config = ApiConfig::load();
            let api_state = ApiState::new(&config);

            // Session storage; a missing data dir leaves us logged out
            // rather than dead on arrival
            let storage = match SessionStorage::at_default_location() {
                Ok(storage) => storage,
                Err(err) => {
                    warn!(%err, "session persistence unavailable, using in-memory only");
                    SessionStorage::new(std::env::temp_dir().join("meridian-session.json"))
                }
            };
            let session_store = SessionStore::new(storage);

            // Restore a persisted session into state + token slot
            tauri::async_runtime::block_on(commands::auth::restore_session(
                &api_state,
                &session_store,
            ));

            // Register state with Tauri
            app.manage(api_state);
            app.manage(session_store);
            app.manage(ResourcesState::new());
            app.manage(ReportStore::default());
            app.manage(ForecastStore::default());
            app.manage(UiState::default());

            info!("State initialized");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Auth commands
            commands::auth::login,
            commands::auth::register,
            commands::auth::logout,
            commands::auth::current_session,
            commands::auth::session_state,
            commands::auth::available_roles,
            commands::auth::validate_registration_draft,
            // Navigation commands
            commands::navigation::get_navigation,
            commands::navigation::get_active_view,
            commands::navigation::set_active_view,
            // Category commands
            commands::categories::fetch_categories,
            commands::categories::create_category,
            commands::categories::delete_category,
            commands::categories::validate_category_draft,
            // Store commands
            commands::stores::fetch_stores,
            commands::stores::create_store,
            commands::stores::update_store,
            commands::stores::delete_store,
            commands::stores::validate_store_draft,
            // Product commands
            commands::products::fetch_products,
            commands::products::create_product,
            commands::products::update_product,
            commands::products::delete_product,
            commands::products::search_products,
            commands::products::validate_product_draft,
            // Supplier commands
            commands::suppliers::fetch_suppliers,
            commands::suppliers::create_supplier,
            commands::suppliers::update_supplier,
            commands::suppliers::delete_supplier,
            commands::suppliers::validate_supplier_draft,
            // Warehouse commands
            commands::warehouses::fetch_warehouses,
            commands::warehouses::create_warehouse,
            commands::warehouses::update_warehouse,
            commands::warehouses::delete_warehouse,
            commands::warehouses::validate_warehouse_draft,
            // Purchase-order commands
            commands::purchase_orders::fetch_purchase_orders,
            commands::purchase_orders::create_purchase_order,
            commands::purchase_orders::receive_purchase_order,
            commands::purchase_orders::pay_purchase_order,
            commands::purchase_orders::update_purchase_order_status,
            commands::purchase_orders::validate_purchase_order_draft,
            commands::purchase_orders::validate_payment_draft,
            // Sales-order commands
            commands::sales_orders::fetch_sales_orders,
            commands::sales_orders::place_sales_order,
            commands::sales_orders::ship_sales_order,
            commands::sales_orders::pay_sales_order,
            commands::sales_orders::update_sales_order_status,
            commands::sales_orders::search_sales_orders,
            commands::sales_orders::validate_sales_order_draft,
            // Inventory commands
            commands::inventory::fetch_inventory,
            // Report commands
            commands::reports::fetch_inventory_summary,
            commands::reports::fetch_purchase_order_history,
            commands::reports::fetch_low_stock_report,
            // Forecasting commands
            commands::forecasting::run_forecast,
            commands::forecasting::forecast_state,
            // Dashboard commands
            commands::dashboard::dashboard_metrics,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=meridian=trace` - Show trace for meridian crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,meridian=debug,reqwest=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
