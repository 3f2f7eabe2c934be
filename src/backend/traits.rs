//! Collaborator traits
//!
//! The picker only talks to the outside world through these traits, so the
//! engine can be driven in tests by recording fakes.

use super::error::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One line of session listing output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionInfo {
    /// Session name
    pub name: String,
    /// Whether any client is attached
    pub attached: bool,
    /// Number of windows
    pub windows: u32,
}

/// One window of a session, for the details panel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowInfo {
    /// Window index
    pub index: u32,
    /// Window name
    pub name: String,
    /// Command running in the active pane
    pub command: String,
    /// Working directory of the active pane
    pub path: String,
}

/// Session and window information shown next to the list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionDetails {
    /// Session name
    pub name: String,
    /// Windows in index order
    pub windows: Vec<WindowInfo>,
}

/// Terminal multiplexer operations
pub trait SessionBackend {
    /// List live sessions
    ///
    /// A missing server is not an error; it yields an empty list.
    ///
    /// # Errors
    /// Returns `BackendError` if the listing cannot be produced.
    fn list_sessions(&self) -> Result<Vec<SessionInfo>>;

    /// Window details for a single session
    ///
    /// # Errors
    /// Returns `BackendError` if the session cannot be inspected.
    fn session_details(&self, name: &str) -> Result<SessionDetails>;

    /// Switch the current client to (or attach to) a session
    ///
    /// # Errors
    /// Returns `BackendError` if the switch fails.
    fn switch_to(&self, name: &str) -> Result<()>;

    /// Create (or reuse) a session rooted at `path` and switch to it
    ///
    /// Returns the session name derived from the directory.
    ///
    /// # Errors
    /// Returns `BackendError` if creating or switching fails.
    fn create_at(&self, path: &Path) -> Result<String>;

    /// Create (or reuse) a session with a free-text name and switch to it
    ///
    /// # Errors
    /// Returns `BackendError` if creating or switching fails.
    fn create_named(&self, name: &str) -> Result<()>;

    /// Kill a session
    ///
    /// # Errors
    /// Returns `BackendError` if the session cannot be killed.
    fn kill_session(&self, name: &str) -> Result<()>;

    /// Rename a session
    ///
    /// # Errors
    /// Returns `BackendError` if either name is empty or the rename fails.
    fn rename_session(&self, old: &str, new: &str) -> Result<()>;
}

/// Candidate project directories
pub trait ProjectSource {
    /// Directories that new sessions can be created from
    ///
    /// # Errors
    /// Returns `BackendError` if the scan fails.
    fn list_projects(&self) -> Result<Vec<PathBuf>>;
}

/// Remote repository cloning
pub trait RepoCloner {
    /// Clone `url` locally (or reuse an existing checkout) and return its path
    ///
    /// # Errors
    /// Returns `BackendError` if the URL is unusable or the clone fails.
    fn clone_repo(&self, url: &str) -> Result<PathBuf>;
}
