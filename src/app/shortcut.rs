//! Global reload key-binding.
//!
//! One shortcut, F5, registered through the global-shortcut plugin. It is
//! the single source of truth for the reload action; there is no
//! in-content key listener duplicating it.

use tauri::{AppHandle, Manager};
use tauri_plugin_global_shortcut::{Code, GlobalShortcutExt, Shortcut, ShortcutState};

use crate::app::window;

fn reload_shortcut() -> Shortcut {
    Shortcut::new(None, Code::F5)
}

/// Register the reload shortcut. Any prior binding is replaced, so
/// re-registration is safe; a failure here is non-fatal at the call site.
pub fn register_reload(app: &AppHandle) -> Result<(), tauri_plugin_global_shortcut::Error> {
    let _ = app.global_shortcut().unregister(reload_shortcut());

    app.global_shortcut().on_shortcut(reload_shortcut(), |app, _shortcut, event| {
        if event.state != ShortcutState::Pressed {
            return;
        }

        // The binding is global, but reload only applies while the shell
        // window is the one in focus.
        let Some(win) = app.get_webview_window(window::MAIN_WINDOW_LABEL) else {
            return;
        };
        if win.is_focused().unwrap_or(false) {
            window::reload(app);
        }
    })
}

/// Drop every shortcut this process registered. Safe to call more than
/// once, including when nothing is registered.
pub fn unregister_all(app: &AppHandle) {
    if let Err(e) = app.global_shortcut().unregister_all() {
        log::warn!("failed to unregister global shortcuts: {e}");
    }
}
