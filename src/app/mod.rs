//! Application lifecycle and platform integration.
//!
//! - `window`: main window construction and visibility operations
//! - `tray`: system tray setup and menu handling
//! - `events`: window event handlers
//! - `state`: process-wide shell state (quit flag, first-show latch)
//! - `shortcut`: global reload key-binding

pub mod events;
pub mod state;
pub mod window;

#[cfg(desktop)]
pub mod shortcut;

#[cfg(desktop)]
pub mod tray;
