mod app;
mod error;

use app::state::ShellState;
use app::window::MAIN_WINDOW_LABEL;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut builder = tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(ShellState::default());

    #[cfg(desktop)]
    {
        builder = builder
            .plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
                // A second launch just brings the running shell to the front.
                app::window::show_main_window(app);
            }))
            .plugin(tauri_plugin_global_shortcut::Builder::new().build());
    }

    let tauri_app = builder
        .on_window_event(app::events::handle_window_event)
        .on_page_load(|webview, payload| {
            // The window is created hidden; reveal it once the first load
            // finishes so the user never sees a blank frame.
            if webview.label() == MAIN_WINDOW_LABEL
                && matches!(payload.event(), tauri::webview::PageLoadEvent::Finished)
                && webview.state::<ShellState>().first_load()
            {
                app::window::show_main_window(webview.app_handle());
            }
        })
        .setup(|tauri_app| {
            let handle = tauri_app.handle();

            // Window and tray failures are fatal: a shell with neither
            // surface has nothing to offer.
            app::window::create_main_window(handle)?;

            #[cfg(desktop)]
            {
                app::tray::setup_tray(handle)?;

                if let Err(e) = app::shortcut::register_reload(handle) {
                    log::warn!("reload shortcut unavailable: {e}");
                }
            }

            log::info!("shell ready, loading {}", app::window::HOME_URL);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    tauri_app.run(|app_handle, event| {
        if let tauri::RunEvent::ExitRequested { api, code, .. } = &event {
            #[cfg(desktop)]
            app::shortcut::unregister_all(app_handle);

            // No explicit exit code means every window closed on its own:
            // stay resident on macOS, terminate elsewhere.
            if code.is_none() && cfg!(target_os = "macos") {
                api.prevent_exit();
            } else {
                app_handle.state::<ShellState>().request_quit();
            }
            return;
        }

        if let tauri::RunEvent::Exit = &event {
            #[cfg(desktop)]
            app::shortcut::unregister_all(app_handle);
            log::info!("shell exiting");
            return;
        }

        #[cfg(target_os = "macos")]
        if let tauri::RunEvent::Reopen { .. } = event {
            // Dock icon click: recreate the window if it is gone,
            // otherwise bring the existing one back. A recreated window
            // needs its reload binding back as well.
            if app_handle.get_webview_window(MAIN_WINDOW_LABEL).is_none() {
                match app::window::create_main_window(app_handle) {
                    Ok(_) => {
                        if let Err(e) = app::shortcut::register_reload(app_handle) {
                            log::warn!("reload shortcut unavailable: {e}");
                        }
                    }
                    Err(e) => log::error!("failed to recreate main window: {e}"),
                }
            } else {
                app::window::show_main_window(app_handle);
            }
        }
    });
}
