//! # meridian-state: Client-Side State Synchronization
//!
//! The request-lifecycle state machine for every backend resource, the
//! session state machine for the view shell, and the persisted session
//! storage.
//!
//! ## The Lifecycle Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Resource Request Lifecycle                              │
//! │                                                                         │
//! │            fetch_all()            fulfilled                             │
//! │   ┌──────┐ ────────► ┌─────────┐ ──────────► ┌───────────┐             │
//! │   │ Idle │           │ Loading │             │ Succeeded │             │
//! │   └──────┘           └─────────┘ ──────────► └───────────┘             │
//! │      ▲                                rejected      │                   │
//! │      │                              ┌────────┐     │ create/update/    │
//! │      └── (reset) ◄───────────────── │ Failed │     │ delete patch      │
//! │                                     └────────┘     ▼ items in place    │
//! │                                                                         │
//! │  INVARIANTS                                                            │
//! │  • items reflects the last successful fetch or mutation response       │
//! │  • a failed fetch leaves items untouched                               │
//! │  • fetch_all is a no-op unless status is Idle (idle guard)             │
//! │  • mutations never touch status; only fetches do                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`status`] - the `FetchStatus` marker
//! - [`resource`] - `ResourceState<T>`: pure reducers for one collection
//! - [`controller`] - `ResourceStore<T>`: async lifecycle around the reducers
//! - [`session`] - authentication state machine
//! - [`reports`] - report slice (summary / history / low stock)
//! - [`forecasting`] - forecasting slice (records + predictions)
//! - [`storage`] - persisted session file (localStorage analog)

pub mod controller;
pub mod forecasting;
pub mod reports;
pub mod resource;
pub mod session;
pub mod status;
pub mod storage;

pub use controller::ResourceStore;
pub use forecasting::ForecastState;
pub use reports::ReportState;
pub use resource::ResourceState;
pub use session::SessionState;
pub use status::FetchStatus;
pub use storage::{PersistedSession, SessionStorage, StorageError};
