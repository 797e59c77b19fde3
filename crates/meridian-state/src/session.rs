//! # Session State
//!
//! The authentication state machine behind the view shell.
//!
//! ## Shell States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Authentication Lifecycle                             │
//! │                                                                         │
//! │                      login_fulfilled(session)                           │
//! │  ┌─────────────────┐ ──────────────────────────► ┌─────────────────┐   │
//! │  │ Unauthenticated │                             │  Authenticated  │   │
//! │  │ (session: None) │ ◄────────────────────────── │ (session: Some) │   │
//! │  └─────────────────┘          logout             └─────────────────┘   │
//! │         │                                                               │
//! │         │ register_fulfilled: status = Succeeded but session            │
//! │         │ stays None — registering does NOT log the user in;            │
//! │         ▼ the UI returns to the login form                              │
//! │  (still unauthenticated)                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure reducers only; the async login/register orchestration (API call,
//! token slot, persisted file) lives in the desktop app's auth commands.

use meridian_core::{Role, Session};
use serde::Serialize;
use tracing::info;

use crate::status::FetchStatus;

/// Authentication state for the shell.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// `Some` while authenticated.
    pub session: Option<Session>,
    /// Lifecycle of the most recent login/register request.
    pub status: FetchStatus,
    /// Message from the most recent failed login/register, if any.
    pub error: Option<String>,
}

impl SessionState {
    /// Restores a persisted session at startup. Does not touch status:
    /// nothing is in flight, the user is simply already logged in.
    pub fn restore(&mut self, session: Session) {
        info!(email = %session.email, role = %session.role, "session restored from storage");
        self.session = Some(session);
    }

    /// Login or register request started.
    pub fn auth_pending(&mut self) {
        self.status = FetchStatus::Loading;
        self.error = None;
    }

    /// Login succeeded: the shell flips to authenticated.
    pub fn login_fulfilled(&mut self, session: Session) {
        info!(email = %session.email, role = %session.role, "login succeeded");
        self.session = Some(session);
        self.status = FetchStatus::Succeeded;
    }

    /// Registration succeeded. Deliberately does NOT set the session —
    /// the user goes back to the login form with fresh credentials.
    pub fn register_fulfilled(&mut self) {
        self.status = FetchStatus::Succeeded;
    }

    /// Login or register failed.
    pub fn auth_rejected(&mut self, message: impl Into<String>) {
        self.status = FetchStatus::Failed;
        self.error = Some(message.into());
    }

    /// Explicit logout: back to the unauthenticated shell.
    pub fn logout(&mut self) {
        info!("logged out");
        self.session = None;
        self.status = FetchStatus::Idle;
        self.error = None;
    }

    /// Whether the shell should render the authenticated layout.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// The current role, when authenticated.
    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|session| session.role)
    }

    /// The current bearer token, when authenticated.
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.token.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            token: "jwt-token".to_string(),
            role: Role::BusinessOwner,
            email: "owner@example.com".to_string(),
            name: Some("Alex Doe".to_string()),
        }
    }

    #[test]
    fn test_login_transitions_to_authenticated() {
        let mut state = SessionState::default();
        assert!(!state.is_authenticated());

        state.auth_pending();
        assert_eq!(state.status, FetchStatus::Loading);

        state.login_fulfilled(session());
        assert!(state.is_authenticated());
        assert_eq!(state.role(), Some(Role::BusinessOwner));
        assert_eq!(state.token(), Some("jwt-token"));
        assert_eq!(state.status, FetchStatus::Succeeded);
    }

    #[test]
    fn test_register_does_not_authenticate() {
        let mut state = SessionState::default();
        state.auth_pending();
        state.register_fulfilled();

        assert_eq!(state.status, FetchStatus::Succeeded);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_failed_login_records_error() {
        let mut state = SessionState::default();
        state.auth_pending();
        state.auth_rejected("Login failed");

        assert!(!state.is_authenticated());
        assert_eq!(state.status, FetchStatus::Failed);
        assert_eq!(state.error.as_deref(), Some("Login failed"));
    }

    #[test]
    fn test_logout_clears_everything() {
        let mut state = SessionState::default();
        state.login_fulfilled(session());
        state.logout();

        assert!(!state.is_authenticated());
        assert_eq!(state.status, FetchStatus::Idle);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_restore_skips_lifecycle() {
        let mut state = SessionState::default();
        state.restore(session());
        assert!(state.is_authenticated());
        assert_eq!(state.status, FetchStatus::Idle);
    }
}
