//! System tray setup and event handling.
//!
//! The tray is the app's persistent surface: closing the window only
//! hides it, and the tray menu is where the process actually quits.

use tauri::{
    image::Image,
    menu::{Menu, MenuItem, PredefinedMenuItem},
    tray::{TrayIconBuilder, TrayIconEvent},
    AppHandle, Manager,
};

use crate::app::{state::ShellState, window};
use crate::error::{ShellError, ShellResult};

/// Identifier of the single tray icon.
pub const TRAY_ID: &str = "main-tray";

/// Set up the system tray with its context menu and event handlers.
pub fn setup_tray(app: &AppHandle) -> ShellResult<()> {
    let home = MenuItem::with_id(app, "home", "Home", true, None::<&str>)
        .map_err(|e| ShellError::Tray(format!("failed to create Home menu item: {e}")))?;
    let reload = MenuItem::with_id(app, "reload", "Reload", true, None::<&str>)
        .map_err(|e| ShellError::Tray(format!("failed to create Reload menu item: {e}")))?;
    let separator = PredefinedMenuItem::separator(app)
        .map_err(|e| ShellError::Tray(format!("failed to create menu separator: {e}")))?;
    let quit = MenuItem::with_id(app, "quit", "Quit", true, None::<&str>)
        .map_err(|e| ShellError::Tray(format!("failed to create Quit menu item: {e}")))?;

    let menu = Menu::with_items(app, &[&home, &reload, &separator, &quit])
        .map_err(|e| ShellError::Tray(format!("failed to build tray menu: {e}")))?;

    let icon = Image::from_bytes(include_bytes!("../../icons/32x32.png"))
        .map_err(|e| ShellError::Tray(format!("failed to load tray icon: {e}")))?;

    TrayIconBuilder::with_id(TRAY_ID)
        .icon(icon)
        .tooltip("Staple")
        .menu(&menu)
        .show_menu_on_left_click(false)
        .on_menu_event(|app, event| match event.id.as_ref() {
            "home" => {
                if let Err(e) = window::go_home(app) {
                    log::error!("tray Home failed: {e}");
                }
            }
            "reload" => window::reload(app),
            "quit" => {
                app.state::<ShellState>().request_quit();
                app.exit(0);
            }
            _ => {}
        })
        .on_tray_icon_event(|tray, event| {
            // Double-click toggles visibility; the menu stays on the
            // platform's context gesture.
            if let TrayIconEvent::DoubleClick { .. } = event {
                window::toggle_main_window(tray.app_handle());
            }
        })
        .build(app)
        .map_err(|e| ShellError::Tray(format!("failed to build tray icon: {e}")))?;

    Ok(())
}
