//! Candidate catalog
//!
//! A catalog is an ordered snapshot of selectable entries pulled from one
//! source: live tmux sessions, or project directories found under the
//! configured search roots. Snapshots are never patched; every refresh
//! builds a new one.

use crate::backend::{BackendError, ProjectSource, SessionBackend, SessionInfo};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// What an entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A live multiplexer session
    Session,
    /// A project directory that a new session can be created from
    Project,
}

/// Which collaborator feeds the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    /// Live sessions
    #[default]
    Sessions,
    /// Project directories
    Projects,
}

impl Source {
    /// Human readable name for titles and status messages
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sessions => "sessions",
            Self::Projects => "projects",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One selectable thing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Short display name (session name or directory basename)
    pub title: String,
    /// Secondary text; `~`-abbreviated path for projects, empty for sessions
    pub description: String,
    /// Identifier handed to the backends (session name or absolute path)
    pub target: String,
    /// Entry kind
    pub kind: EntryKind,
    /// Whether a client is attached (sessions only)
    pub attached: bool,
    /// Number of open windows (sessions only)
    pub window_count: u32,
}

impl Entry {
    /// Build a session entry
    #[must_use]
    pub fn session(name: impl Into<String>, attached: bool, window_count: u32) -> Self {
        let name = name.into();
        Self {
            title: name.clone(),
            description: String::new(),
            target: name,
            kind: EntryKind::Session,
            attached,
            window_count,
        }
    }

    /// Build a project entry from an absolute directory path
    ///
    /// The description abbreviates `home` to `~` when the path lives under it.
    #[must_use]
    pub fn project(path: &Path, home: Option<&Path>) -> Self {
        let title = path
            .file_name()
            .map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy())
            .into_owned();

        Self {
            title,
            description: abbreviate_home(path, home),
            target: path.to_string_lossy().into_owned(),
            kind: EntryKind::Project,
            attached: false,
            window_count: 0,
        }
    }

    /// Whether this entry is a live session
    #[must_use]
    pub const fn is_session(&self) -> bool {
        matches!(self.kind, EntryKind::Session)
    }
}

impl From<SessionInfo> for Entry {
    fn from(info: SessionInfo) -> Self {
        Self::session(info.name, info.attached, info.windows)
    }
}

/// Replace a leading home directory with `~`
#[must_use]
pub fn abbreviate_home(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && !home.as_os_str().is_empty()
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.to_string_lossy());
    }
    path.to_string_lossy().into_owned()
}

/// Immutable, lexicographically ordered snapshot of entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    /// Build a catalog, ordering entries by title (then target)
    #[must_use]
    pub fn new(mut entries: Vec<Entry>) -> Self {
        entries.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.target.cmp(&b.target)));
        Self { entries }
    }

    /// Pull a fresh session catalog
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the session listing fails.
    pub fn sessions(backend: &dyn SessionBackend) -> Result<Self, BackendError> {
        let sessions = backend.list_sessions()?;
        Ok(Self::new(sessions.into_iter().map(Entry::from).collect()))
    }

    /// Pull a fresh project catalog
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the project scan fails.
    pub fn projects(source: &dyn ProjectSource) -> Result<Self, BackendError> {
        let home = dirs::home_dir();
        let paths: Vec<PathBuf> = source.list_projects()?;
        Ok(Self::new(
            paths
                .iter()
                .map(|path| Entry::project(path, home.as_deref()))
                .collect(),
        ))
    }

    /// Entries in catalog order
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
