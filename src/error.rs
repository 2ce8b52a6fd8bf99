//! Central error types for the Staple shell.
//!
//! All errors implement `Serialize` for Tauri IPC compatibility.

use serde::Serialize;
use thiserror::Error;

/// Main error type for shell operations.
#[derive(Error, Debug)]
pub enum ShellError {
    /// Main window creation or manipulation failed
    #[error("Window error: {0}")]
    Window(String),

    /// Tray icon or menu construction failed
    #[error("Tray error: {0}")]
    Tray(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Implement Serialize for Tauri IPC compatibility.
/// Tauri requires errors to be serializable to send to the frontend.
impl Serialize for ShellError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Type alias for Results using ShellError.
pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShellError::Window("build failed".to_string());
        assert_eq!(err.to_string(), "Window error: build failed");

        let err = ShellError::Tray("no icon".to_string());
        assert_eq!(err.to_string(), "Tray error: no icon");
    }

    #[test]
    fn test_error_serialization() {
        let err = ShellError::Tray("menu rejected".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Tray error"));
    }

    #[test]
    fn test_from_parse_error() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: ShellError = parse_err.into();
        assert!(matches!(err, ShellError::Url(_)));
        assert!(err.to_string().starts_with("Invalid URL"));
    }
}
