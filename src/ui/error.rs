//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Stdin or stdout is not a terminal
    #[error("The picker needs an interactive terminal")]
    NotInteractive,

    /// IO error while driving the terminal
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
