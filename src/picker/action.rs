//! Resolving a commit into the action to run

use super::mode::Mode;
use crate::backend::git::is_remote_reference;
use crate::catalog::{Entry, EntryKind};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Outbound action produced by a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "target", rename_all = "snake_case")]
pub enum Action {
    /// Switch to an existing session
    Switch(String),
    /// Create (or reuse) a session rooted at a project directory
    CreateFromPath(PathBuf),
    /// Create a session with a free-text name
    CreateNamed(String),
    /// Clone a remote repository, then create a session in it
    CloneAndCreate(String),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Switch(name) => write!(f, "switch to '{name}'"),
            Self::CreateFromPath(path) => write!(f, "create session in {}", path.display()),
            Self::CreateNamed(name) => write!(f, "create session '{name}'"),
            Self::CloneAndCreate(url) => write!(f, "clone {url} and create session"),
        }
    }
}

/// Action for picking an existing entry
#[must_use]
pub fn entry_action(entry: &Entry) -> Action {
    match entry.kind {
        EntryKind::Session => Action::Switch(entry.target.clone()),
        EntryKind::Project => Action::CreateFromPath(PathBuf::from(&entry.target)),
    }
}

/// Resolve a commit
///
/// In create mode a remote reference always wins, then the selected project,
/// then a new session named after the query. An empty query commits nothing,
/// even with projects listed. Returns `None` when there is nothing to commit;
/// rename commits are not actions.
#[must_use]
pub fn resolve(mode: &Mode, ranked: &[Entry], cursor: usize) -> Option<Action> {
    match mode {
        Mode::Browse | Mode::Filter { .. } => ranked.get(cursor).map(entry_action),
        Mode::Create { query } => {
            let text = query.text().trim();
            if text.is_empty() {
                return None;
            }
            if is_remote_reference(text) {
                return Some(Action::CloneAndCreate(text.to_string()));
            }
            Some(
                ranked
                    .get(cursor)
                    .or_else(|| ranked.first())
                    .map_or_else(|| Action::CreateNamed(text.to_string()), entry_action),
            )
        }
        Mode::Rename { .. } => None,
    }
}
