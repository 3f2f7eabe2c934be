//! mux-sesh - a keyboard-driven tmux session picker
//!
//! Lists live tmux sessions and project directories, ranks them against a
//! typed query, and switches to, creates, clones, renames, or kills sessions.

use thiserror::Error;

pub mod backend;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod logging;
pub mod picker;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum MuxError {
    /// tmux, git, or filesystem collaborator failure
    #[error("{0}")]
    Backend(#[from] backend::BackendError),
    /// Terminal UI failure
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
