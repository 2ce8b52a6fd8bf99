//! Window event handlers.

use tauri::{Manager, Window, WindowEvent};

use crate::app::state::ShellState;
use crate::app::window::MAIN_WINDOW_LABEL;

/// Handle window events for the application.
///
/// This is called from the Tauri builder's `on_window_event` hook.
/// Closing the main window hides it to the tray; the window is only
/// destroyed when the process exits with the quit flag set.
pub fn handle_window_event(window: &Window, event: &WindowEvent) {
    if window.label() != MAIN_WINDOW_LABEL {
        return;
    }

    if let WindowEvent::CloseRequested { api, .. } = event {
        let state = window.state::<ShellState>();
        if !state.is_quitting() {
            api.prevent_close();
            let _ = window.hide();
        }
    }
}
