//! Process-wide shell state.
//!
//! Held as managed Tauri state so lifecycle callbacks receive it by
//! injection instead of reaching for a global. All access happens on the
//! GUI thread; the fields are atomics only because managed state must be
//! `Sync`.

use std::sync::atomic::{AtomicBool, Ordering};

/// State owned by the shell controller for the lifetime of the process.
#[derive(Default)]
pub struct ShellState {
    /// Distinguishes "hide on close" (false) from "terminate on close"
    /// (true). Set on tray Quit or an explicit exit request; never reset.
    quitting: AtomicBool,
    /// Latch for the deferred first show of the main window.
    shown_once: AtomicBool,
}

impl ShellState {
    /// Mark the process as quitting. Close requests stop being
    /// intercepted from this point on.
    pub fn request_quit(&self) {
        self.quitting.store(true, Ordering::Relaxed);
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting.load(Ordering::Relaxed)
    }

    /// Returns true exactly once, on the first finished page load. The
    /// window is created hidden and revealed on that first load;
    /// subsequent reloads never re-trigger the show.
    pub fn first_load(&self) -> bool {
        !self.shown_once.swap(true, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_flag_starts_false() {
        let state = ShellState::default();
        assert!(!state.is_quitting());
    }

    #[test]
    fn quit_flag_sets_and_never_resets() {
        let state = ShellState::default();
        state.request_quit();
        assert!(state.is_quitting());

        // Repeated requests keep the flag set.
        state.request_quit();
        assert!(state.is_quitting());
    }

    #[test]
    fn first_load_latches_after_one_use() {
        let state = ShellState::default();
        assert!(state.first_load());
        assert!(!state.first_load());
        assert!(!state.first_load());
    }

    #[test]
    fn first_load_independent_of_quit_flag() {
        let state = ShellState::default();
        state.request_quit();
        assert!(state.first_load());
    }
}
