//! # Navigation Commands
//!
//! Role-gated sidebar entries and the active-view selector.
//!
//! The sidebar is computed, never configured: the frontend asks for
//! `get_navigation` and renders exactly the entries the capability table
//! grants the session's role. Selecting a view re-checks the table, so a
//! stale frontend cannot navigate into a forbidden page.

use meridian_core::roles::visible_views;
use meridian_core::{ActiveView, CoreError};
use serde::Serialize;
use tauri::State;
use tracing::debug;
use ts_rs::TS;

use crate::error::CommandError;
use crate::state::{SessionStore, UiState};

/// One sidebar entry.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NavEntry {
    pub view: ActiveView,
    pub label: String,
}

/// Sidebar entries for the current role, in display order.
#[tauri::command]
pub fn get_navigation(session: State<'_, SessionStore>) -> Result<Vec<NavEntry>, CommandError> {
    let role = session
        .with_state(|state| state.role())
        .ok_or_else(CommandError::unauthorized)?;

    let entries = visible_views(role)
        .into_iter()
        .map(|view| NavEntry {
            view,
            label: view.label().to_string(),
        })
        .collect();
    Ok(entries)
}

/// The currently rendered view.
#[tauri::command]
pub fn get_active_view(ui: State<'_, UiState>) -> ActiveView {
    ui.active_view()
}

/// Selects the view to render, enforcing the capability table.
#[tauri::command]
pub fn set_active_view(
    session: State<'_, SessionStore>,
    ui: State<'_, UiState>,
    view: ActiveView,
) -> Result<ActiveView, CommandError> {
    let role = session
        .with_state(|state| state.role())
        .ok_or_else(CommandError::unauthorized)?;

    if !view.allows(role) {
        debug!(%role, view = view.label(), "view selection rejected");
        return Err(CoreError::ViewNotAllowed { role, view }.into());
    }

    ui.set_active_view(view);
    Ok(view)
}
