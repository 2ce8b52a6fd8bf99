//! Main window construction and visibility operations.
//!
//! The shell owns exactly one window for the lifetime of the process. It
//! is created hidden, revealed on the first finished page load, hidden
//! (never destroyed) when the user closes it, and destroyed only at
//! process exit.

use tauri::{image::Image, AppHandle, Manager, Url, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use tauri_plugin_opener::OpenerExt;

use crate::error::{ShellError, ShellResult};

/// Label of the single application window.
pub const MAIN_WINDOW_LABEL: &str = "main";

/// The one page this shell wraps.
pub const HOME_URL: &str = "https://web.stapleapp.com";

const DEFAULT_SIZE: (f64, f64) = (1200.0, 800.0);
const MIN_SIZE: (f64, f64) = (800.0, 600.0);

/// Create the main window, hidden until its first page load finishes.
///
/// Navigation is restricted to the home host; any other URL is handed to
/// the default browser and denied in-app, so outbound links never open a
/// second window.
pub fn create_main_window(app: &AppHandle) -> ShellResult<WebviewWindow> {
    let home = Url::parse(HOME_URL)?;

    let opener_handle = app.clone();
    let window = WebviewWindowBuilder::new(app, MAIN_WINDOW_LABEL, WebviewUrl::External(home))
        .title("Staple")
        .inner_size(DEFAULT_SIZE.0, DEFAULT_SIZE.1)
        .min_inner_size(MIN_SIZE.0, MIN_SIZE.1)
        .visible(false)
        .on_navigation(move |url| {
            if !is_external(url) {
                return true;
            }
            log::debug!("redirecting {url} to the default browser");
            if let Err(e) = opener_handle.opener().open_url(url.as_str(), None::<&str>) {
                log::error!("failed to open {url} externally: {e}");
            }
            false
        })
        .build()
        .map_err(|e| ShellError::Window(format!("failed to create main window: {e}")))?;

    let icon = Image::from_bytes(include_bytes!("../../icons/32x32.png"))
        .map_err(|e| ShellError::Window(format!("failed to load window icon: {e}")))?;
    let _ = window.set_icon(icon);

    Ok(window)
}

/// Show the main window, restoring and focusing it.
pub fn show_main_window(app: &AppHandle) {
    let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) else {
        return;
    };

    let _ = window.show();
    let _ = window.unminimize();
    let _ = window.set_focus();
}

/// Toggle main-window visibility (tray double-click).
pub fn toggle_main_window(app: &AppHandle) {
    let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) else {
        return;
    };

    let visible = window.is_visible().unwrap_or(false);
    let minimized = window.is_minimized().unwrap_or(false);

    match toggle_action(visible, minimized) {
        ToggleAction::Show => show_main_window(app),
        ToggleAction::Hide => {
            let _ = window.hide();
        }
    }
}

/// Navigate the main window back to the home page and bring it to the
/// front.
pub fn go_home(app: &AppHandle) -> ShellResult<()> {
    if let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) {
        window
            .navigate(Url::parse(HOME_URL)?)
            .map_err(|e| ShellError::Window(format!("failed to navigate home: {e}")))?;
    }
    show_main_window(app);
    Ok(())
}

/// Reload the page currently loaded in the main window. The previous
/// load, if still in flight, is abandoned by the renderer.
pub fn reload(app: &AppHandle) {
    if let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) {
        let _ = window.eval("location.reload()");
    }
}

#[derive(Debug, PartialEq, Eq)]
enum ToggleAction {
    Show,
    Hide,
}

/// A minimized window still reports visible, so treat it as hidden.
fn toggle_action(visible: bool, minimized: bool) -> ToggleAction {
    if !visible || minimized {
        ToggleAction::Show
    } else {
        ToggleAction::Hide
    }
}

/// Whether a navigation target should leave the app for the default
/// browser. Anything not on the home host qualifies, whatever its
/// scheme (mailto:, tel:, ...); only the renderer-internal schemes
/// (about:, data:) stay in-app.
fn is_external(url: &Url) -> bool {
    if matches!(url.scheme(), "about" | "data") {
        return false;
    }
    let Ok(home) = Url::parse(HOME_URL) else {
        return false;
    };
    url.host_str() != home.host_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_url_is_well_formed() {
        let home = Url::parse(HOME_URL).unwrap();
        assert_eq!(home.scheme(), "https");
        assert!(home.host_str().is_some());
    }

    #[test]
    fn default_size_respects_minimum() {
        assert!(DEFAULT_SIZE.0 >= MIN_SIZE.0);
        assert!(DEFAULT_SIZE.1 >= MIN_SIZE.1);
    }

    #[test]
    fn home_navigation_stays_in_app() {
        let url = Url::parse(HOME_URL).unwrap();
        assert!(!is_external(&url));

        let url = Url::parse("https://web.stapleapp.com/inbox?tab=all").unwrap();
        assert!(!is_external(&url));
    }

    #[test]
    fn foreign_hosts_open_externally() {
        let url = Url::parse("https://example.com/docs").unwrap();
        assert!(is_external(&url));

        // Sibling subdomains are foreign hosts too.
        let url = Url::parse("https://cdn.stapleapp.com/asset.js").unwrap();
        assert!(is_external(&url));
    }

    #[test]
    fn external_intent_schemes_open_externally() {
        let url = Url::parse("mailto:support@stapleapp.com").unwrap();
        assert!(is_external(&url));

        let url = Url::parse("tel:+15550100").unwrap();
        assert!(is_external(&url));
    }

    #[test]
    fn renderer_internal_schemes_stay_in_app() {
        let url = Url::parse("about:blank").unwrap();
        assert!(!is_external(&url));

        let url = Url::parse("data:text/html,hello").unwrap();
        assert!(!is_external(&url));
    }

    #[test]
    fn toggle_never_noops() {
        assert_eq!(toggle_action(true, false), ToggleAction::Hide);
        assert_eq!(toggle_action(false, false), ToggleAction::Show);
        assert_eq!(toggle_action(true, true), ToggleAction::Show);
        assert_eq!(toggle_action(false, true), ToggleAction::Show);
    }
}
