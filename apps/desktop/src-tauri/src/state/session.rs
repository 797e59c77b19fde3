//! # Session Store
//!
//! Couples the in-memory [`SessionState`] machine with the persisted
//! session file, so the auth commands have one place to go.
//!
//! ## Thread Safety
//! The state is wrapped in a `std::sync::Mutex` and only ever locked for
//! the duration of one reducer call — never across an await.

use std::sync::Mutex;

use meridian_core::Session;
use meridian_state::{SessionState, SessionStorage, StorageError};
use tracing::warn;

/// Tauri-managed session state plus its on-disk twin.
#[derive(Debug)]
pub struct SessionStore {
    state: Mutex<SessionState>,
    storage: SessionStorage,
}

impl SessionStore {
    /// Creates an unauthenticated store backed by the given storage.
    pub fn new(storage: SessionStorage) -> Self {
        SessionStore {
            state: Mutex::new(SessionState::default()),
            storage,
        }
    }

    /// Executes a function with read access to the session state.
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SessionState) -> R,
    {
        let state = self.state.lock().expect("session state mutex poisoned");
        f(&state)
    }

    /// Executes a function with write access to the session state.
    pub fn with_state_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SessionState) -> R,
    {
        let mut state = self.state.lock().expect("session state mutex poisoned");
        f(&mut state)
    }

    /// Loads the persisted session at startup, if one exists. Returns
    /// the restored session so the caller can prime the API token slot.
    pub fn restore_from_disk(&self) -> Option<Session> {
        let persisted = match self.storage.load() {
            Ok(persisted) => persisted?,
            Err(err) => {
                warn!(%err, "failed to read persisted session");
                return None;
            }
        };
        let session = persisted.user?;
        self.with_state_mut(|state| state.restore(session.clone()));
        Some(session)
    }

    /// Persists a freshly logged-in session. A disk failure is logged,
    /// not fatal — the in-memory session is still valid for this run.
    pub fn persist(&self, session: &Session) {
        if let Err(err) = self.storage.save(session) {
            warn!(%err, "failed to persist session");
        }
    }

    /// Deletes the persisted session on logout.
    pub fn clear_persisted(&self) -> Result<(), StorageError> {
        self.storage.clear()
    }
}
