//! # State Module
//!
//! Managed application state for the Tauri desktop app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, we use
//! separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct individual states in isolation
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(api_state);      app.manage(resources_state);      │   │
//! │  │  app.manage(session_store);  app.manage(ui_state);             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │      ┌───────────────┬──────┴────────┬──────────────────┐              │
//! │      ▼               ▼               ▼                  ▼              │
//! │  ┌─────────┐  ┌──────────────┐  ┌──────────────┐  ┌──────────┐        │
//! │  │ApiState │  │ SessionStore │  │ResourcesState│  │ UiState  │        │
//! │  │         │  │              │  │              │  │          │        │
//! │  │ REST +  │  │ SessionState │  │ one Resource-│  │ active   │        │
//! │  │ sidecar │  │ + session    │  │ Store per    │  │ view     │        │
//! │  │ clients │  │ file on disk │  │ resource     │  │          │        │
//! │  └─────────┘  └──────────────┘  └──────────────┘  └──────────┘        │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • ApiState: reqwest clients are internally shareable                  │
//! │  • SessionStore / UiState: Mutex-guarded, never held across await      │
//! │  • ResourcesState: each ResourceStore guards itself                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod api;
mod resources;
mod session;
mod ui;

pub use api::ApiState;
pub use resources::{ForecastStore, ReportStore, ResourcesState};
pub use session::SessionStore;
pub use ui::UiState;
