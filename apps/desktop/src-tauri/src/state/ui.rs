//! # UI State
//!
//! The single active-view selector. In-memory only: it starts at the
//! dashboard on every launch and is never persisted — there is no
//! routing and no deep-linking.

use std::sync::Mutex;

use meridian_core::ActiveView;

/// Tauri-managed active view.
#[derive(Debug, Default)]
pub struct UiState {
    view: Mutex<ActiveView>,
}

impl UiState {
    /// The currently selected view.
    pub fn active_view(&self) -> ActiveView {
        *self.view.lock().expect("ui state mutex poisoned")
    }

    /// Selects a view. Capability checks happen in the command layer
    /// before this is called.
    pub fn set_active_view(&self, view: ActiveView) {
        *self.view.lock().expect("ui state mutex poisoned") = view;
    }

    /// Back to the dashboard (on logout).
    pub fn reset(&self) {
        self.set_active_view(ActiveView::Dashboard);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_dashboard() {
        let ui = UiState::default();
        assert_eq!(ui.active_view(), ActiveView::Dashboard);
    }

    #[test]
    fn test_set_and_reset() {
        let ui = UiState::default();
        ui.set_active_view(ActiveView::Products);
        assert_eq!(ui.active_view(), ActiveView::Products);
        ui.reset();
        assert_eq!(ui.active_view(), ActiveView::Dashboard);
    }
}
