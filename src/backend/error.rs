//! Backend error types

use thiserror::Error;

/// Errors raised by the session, project, and clone collaborators
#[derive(Debug, Error)]
pub enum BackendError {
    /// The external program could not be started
    #[error("Failed to run {program}: {source}")]
    Spawn {
        /// Program name (e.g. "tmux")
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The external program ran but reported failure
    #[error("{program} {command} failed: {detail}")]
    CommandFailed {
        /// Program name
        program: String,
        /// Subcommand that failed (e.g. "kill-session")
        command: String,
        /// Trimmed stderr, or the exit status if stderr was empty
        detail: String,
    },

    /// A remote reference without a recognizable repository segment
    #[error("Could not extract repository name from '{0}'")]
    InvalidRemote(String),

    /// A session name was empty after trimming
    #[error("Session names cannot be empty")]
    EmptyName,

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for backend operations
pub type Result<T> = std::result::Result<T, BackendError>;
