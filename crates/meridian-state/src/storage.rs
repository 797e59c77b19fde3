//! # Session Storage
//!
//! File-backed persistence for the authenticated session — the desktop
//! analog of the browser's localStorage keys.
//!
//! ## Storage Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  session.json (platform data dir)                                       │
//! │                                                                         │
//! │  {                                                                      │
//! │    "user":  { "token": "…", "role": "ROLE_…", "email": "…" },           │
//! │    "token": "…"                                                         │
//! │  }                                                                      │
//! │                                                                         │
//! │  Two keys on purpose: the session object feeds profile display and      │
//! │  shell restoration, while the bare token is all the request layer       │
//! │  ever needs to read.                                                    │
//! │                                                                         │
//! │  Written  on successful login                                           │
//! │  Read     once at startup to restore the authenticated shell            │
//! │  Deleted  on logout                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reads and writes are synchronous; the file is tiny and only touched at
//! login/logout/startup.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use meridian_core::Session;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// File name under the platform data directory.
const SESSION_FILE: &str = "session.json";

/// Errors from the persisted session file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not determine app data directory")]
    NoDataDir,

    #[error("session file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("session file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The on-disk shape: the serialized session object plus the bare token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    pub user: Option<Session>,
    pub token: Option<String>,
}

/// Handle to the session file.
#[derive(Debug, Clone)]
pub struct SessionStorage {
    path: PathBuf,
}

impl SessionStorage {
    /// Creates a storage handle at an explicit path (tests use a temp
    /// directory).
    pub fn new(path: PathBuf) -> Self {
        SessionStorage { path }
    }

    /// Creates a storage handle at the platform-default location.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.meridian.erp/session.json`
    /// - **Windows**: `%APPDATA%\meridian\erp\data\session.json`
    /// - **Linux**: `~/.local/share/meridian-erp/session.json`
    ///
    /// ## Development Override
    /// Set `MERIDIAN_SESSION_PATH` to use a custom file path.
    pub fn at_default_location() -> Result<Self, StorageError> {
        if let Ok(path) = std::env::var("MERIDIAN_SESSION_PATH") {
            return Ok(SessionStorage::new(PathBuf::from(path)));
        }

        let proj_dirs = ProjectDirs::from("com", "meridian", "erp").ok_or(StorageError::NoDataDir)?;
        let data_dir = proj_dirs.data_dir();
        fs::create_dir_all(data_dir)?;
        Ok(SessionStorage::new(data_dir.join(SESSION_FILE)))
    }

    /// Loads the persisted session, if any.
    ///
    /// A missing file is a normal first run (`Ok(None)`); a corrupt file
    /// is logged and treated as absent rather than blocking startup.
    pub fn load(&self) -> Result<Option<PersistedSession>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no persisted session");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str::<PersistedSession>(&raw) {
            Ok(persisted) => Ok(Some(persisted)),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "discarding corrupt session file");
                Ok(None)
            }
        }
    }

    /// Writes the session and token. Called on successful login.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let persisted = PersistedSession {
            user: Some(session.clone()),
            token: Some(session.token.clone()),
        };
        let raw = serde_json::to_string_pretty(&persisted)?;
        fs::write(&self.path, raw)?;
        debug!(path = %self.path.display(), "session persisted");
        Ok(())
    }

    /// Deletes the session file. Called on logout; a missing file is fine.
    pub fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_core::Role;

    fn storage_in(dir: &tempfile::TempDir) -> SessionStorage {
        SessionStorage::new(dir.path().join(SESSION_FILE))
    }

    fn session() -> Session {
        Session {
            token: "jwt-token".to_string(),
            role: Role::InventoryManager,
            email: "im@example.com".to_string(),
            name: None,
        }
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);

        storage.save(&session()).unwrap();
        let persisted = storage.load().unwrap().unwrap();

        assert_eq!(persisted.token.as_deref(), Some("jwt-token"));
        assert_eq!(persisted.user.unwrap().email, "im@example.com");
    }

    #[test]
    fn test_clear_removes_file_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);

        storage.save(&session()).unwrap();
        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());

        // Clearing again must not error.
        storage.clear().unwrap();
    }

    #[test]
    fn test_corrupt_file_treated_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        fs::write(dir.path().join(SESSION_FILE), "{not json").unwrap();

        assert!(storage.load().unwrap().is_none());
    }
}
