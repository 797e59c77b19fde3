//! # Auth Commands
//!
//! Login, registration, logout, and session restoration.
//!
//! ## Login Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Login Flow                                      │
//! │                                                                         │
//! │  invoke('login', { request: { email, password } })                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate (both fields present) ── errors? ──► VALIDATION_ERROR         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  POST /auth/authenticate ── rejected? ──► auth_rejected + REQUEST_FAILED│
//! │       │ 200 { token, role }                                             │
//! │       ▼                                                                 │
//! │  Session { token, role, email (from request), name }                    │
//! │   ├── token slot ◄── set_token(Some(token))                             │
//! │   ├── session file ◄── persist({ user, token })                         │
//! │   └── SessionState ◄── login_fulfilled  ──► shell flips to              │
//! │                                             authenticated layout        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Registration succeeds without logging the user in: the response is
//! acknowledged, no token is stored, and the UI returns to the login
//! form.

use meridian_core::validation;
use meridian_core::{AuthenticationRequest, RegisterRequest, Role, Session};
use meridian_state::SessionState;
use tauri::State;
use tracing::{debug, info};

use crate::error::CommandError;
use crate::state::{ApiState, SessionStore, UiState};

/// Authenticates against the backend and flips the shell to the
/// authenticated layout.
#[tauri::command]
pub async fn login(
    api: State<'_, ApiState>,
    session: State<'_, SessionStore>,
    request: AuthenticationRequest,
) -> Result<Session, CommandError> {
    debug!(email = %request.email, "login command");
    validation::check(validation::validate_login(&request))?;

    session.with_state_mut(|state| state.auth_pending());

    match api.api.auth().authenticate(&request).await {
        Ok(response) => {
            let new_session = Session {
                token: response.token,
                role: response.role,
                email: request.email,
                name: response.name,
            };
            api.api.set_token(Some(new_session.token.clone())).await;
            session.persist(&new_session);
            session.with_state_mut(|state| state.login_fulfilled(new_session.clone()));
            Ok(new_session)
        }
        Err(err) => {
            let message = err.user_message("Login failed");
            session.with_state_mut(|state| state.auth_rejected(message.clone()));
            Err(CommandError::request_failed(message))
        }
    }
}

/// Registers a new account. Does NOT log the user in — the caller
/// switches back to the login form on success.
#[tauri::command]
pub async fn register(
    api: State<'_, ApiState>,
    session: State<'_, SessionStore>,
    request: RegisterRequest,
) -> Result<(), CommandError> {
    debug!(email = %request.email, role = %request.role, "register command");
    validation::check(validation::validate_registration(&request))?;

    session.with_state_mut(|state| state.auth_pending());

    match api.api.auth().register(&request).await {
        Ok(_response) => {
            session.with_state_mut(|state| state.register_fulfilled());
            info!(email = %request.email, "registration succeeded");
            Ok(())
        }
        Err(err) => {
            let message = err.user_message("Registration failed");
            session.with_state_mut(|state| state.auth_rejected(message.clone()));
            Err(CommandError::request_failed(message))
        }
    }
}

/// Logs out: clears the in-memory session, the persisted file, the
/// bearer token, and resets the active view for the next login.
#[tauri::command]
pub async fn logout(
    api: State<'_, ApiState>,
    session: State<'_, SessionStore>,
    ui: State<'_, UiState>,
) -> Result<(), CommandError> {
    debug!("logout command");
    session.with_state_mut(|state| state.logout());
    api.api.set_token(None).await;
    ui.reset();
    // In-memory logout is already complete; a leftover session file is
    // still worth reporting so it doesn't resurrect the login on restart.
    if let Err(err) = session.clear_persisted() {
        return Err(CommandError::internal(format!("failed to clear session file: {err}")));
    }
    Ok(())
}

/// The current session, if authenticated. The frontend calls this once
/// at startup to decide which shell to render.
#[tauri::command]
pub fn current_session(session: State<'_, SessionStore>) -> Option<Session> {
    session.with_state(|state| state.session.clone())
}

/// Full session state (status + error) for the login/register forms.
#[tauri::command]
pub fn session_state(session: State<'_, SessionStore>) -> SessionState {
    session.with_state(|state| state.clone())
}

/// One selectable role in the registration form.
#[derive(Debug, Clone, serde::Serialize, ts_rs::TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RoleOption {
    pub role: Role,
    pub label: String,
}

/// Roles offered by the registration form.
#[tauri::command]
pub fn available_roles() -> Vec<RoleOption> {
    Role::ALL
        .into_iter()
        .map(|role| RoleOption {
            role,
            label: role.label().to_string(),
        })
        .collect()
}

/// Pure validation for on-change feedback in the registration form.
#[tauri::command]
pub fn validate_registration_draft(draft: RegisterRequest) -> meridian_core::FieldErrors {
    validation::validate_registration(&draft)
}

/// Restores a persisted session into the managed state and token slot.
/// Called from the setup hook, not over IPC.
pub async fn restore_session(api: &ApiState, session: &SessionStore) {
    if let Some(restored) = session.restore_from_disk() {
        api.api.set_token(Some(restored.token.clone())).await;
        info!(email = %restored.email, "restored persisted session");
    }
}
