//! Testing utilities for mux-sesh
//!
//! Recording fakes for the backend traits, so the picker can be driven
//! without tmux or a real filesystem, plus an output writer that captures
//! messages in memory.
//!
//! Only available when compiled with `cfg(test)`.

use crate::backend::{
    BackendError, ProjectSource, RepoCloner, Result, SessionBackend, SessionDetails, SessionInfo,
};
use crate::ui::output::{MessageLevel, OutputWriter};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// In-memory session backend that records mutating calls
#[derive(Debug, Default)]
pub struct FakeSessions {
    sessions: RefCell<Vec<SessionInfo>>,
    killed: RefCell<Vec<String>>,
    renamed: RefCell<Vec<(String, String)>>,
    calls: RefCell<Vec<String>>,
    fail_list: bool,
    fail_mutations: bool,
}

impl FakeSessions {
    /// Backend holding detached single-window sessions with these names
    #[must_use]
    pub fn with(names: &[&str]) -> Self {
        let sessions = names
            .iter()
            .map(|name| SessionInfo {
                name: (*name).to_string(),
                attached: false,
                windows: 1,
            })
            .collect();
        Self {
            sessions: RefCell::new(sessions),
            ..Self::default()
        }
    }

    /// Backend whose listing always fails
    #[must_use]
    pub fn failing_list() -> Self {
        Self {
            fail_list: true,
            ..Self::default()
        }
    }

    /// Make every mutating call fail
    #[must_use]
    pub fn failing_mutations(mut self) -> Self {
        self.fail_mutations = true;
        self
    }

    /// Sessions killed so far
    #[must_use]
    pub fn killed(&self) -> Vec<String> {
        self.killed.borrow().clone()
    }

    /// Switch and create calls so far, as `verb:argument`
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Renames performed so far, as (old, new)
    #[must_use]
    pub fn renamed(&self) -> Vec<(String, String)> {
        self.renamed.borrow().clone()
    }

    fn failure(command: &str) -> BackendError {
        BackendError::CommandFailed {
            program: "tmux".to_string(),
            command: command.to_string(),
            detail: "simulated failure".to_string(),
        }
    }
}

impl SessionBackend for FakeSessions {
    fn list_sessions(&self) -> Result<Vec<SessionInfo>> {
        if self.fail_list {
            return Err(Self::failure("list-sessions"));
        }
        Ok(self.sessions.borrow().clone())
    }

    fn session_details(&self, name: &str) -> Result<SessionDetails> {
        Ok(SessionDetails {
            name: name.to_string(),
            windows: Vec::new(),
        })
    }

    fn switch_to(&self, name: &str) -> Result<()> {
        if self.fail_mutations {
            return Err(Self::failure("switch-client"));
        }
        self.calls.borrow_mut().push(format!("switch:{name}"));
        Ok(())
    }

    fn create_at(&self, path: &Path) -> Result<String> {
        if self.fail_mutations {
            return Err(Self::failure("new-session"));
        }
        self.calls
            .borrow_mut()
            .push(format!("create_at:{}", path.display()));
        Ok(path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default())
    }

    fn create_named(&self, name: &str) -> Result<()> {
        if self.fail_mutations {
            return Err(Self::failure("new-session"));
        }
        self.calls.borrow_mut().push(format!("create_named:{name}"));
        Ok(())
    }

    fn kill_session(&self, name: &str) -> Result<()> {
        if self.fail_mutations {
            return Err(Self::failure("kill-session"));
        }
        self.sessions.borrow_mut().retain(|s| s.name != name);
        self.killed.borrow_mut().push(name.to_string());
        Ok(())
    }

    fn rename_session(&self, old: &str, new: &str) -> Result<()> {
        if self.fail_mutations {
            return Err(Self::failure("rename-session"));
        }
        for session in self.sessions.borrow_mut().iter_mut() {
            if session.name == old {
                session.name = new.to_string();
            }
        }
        self.renamed.borrow_mut().push((old.to_string(), new.to_string()));
        Ok(())
    }
}

/// Fixed list of project directories
#[derive(Debug, Default)]
pub struct FakeProjects {
    paths: Vec<PathBuf>,
}

impl FakeProjects {
    /// Projects at these absolute paths
    #[must_use]
    pub fn with(paths: &[&str]) -> Self {
        Self {
            paths: paths.iter().map(PathBuf::from).collect(),
        }
    }
}

impl ProjectSource for FakeProjects {
    fn list_projects(&self) -> Result<Vec<PathBuf>> {
        Ok(self.paths.clone())
    }
}

/// Cloner that pretends every remote lands under `root`
#[derive(Debug, Default)]
pub struct FakeCloner {
    root: PathBuf,
    cloned: RefCell<Vec<String>>,
}

impl FakeCloner {
    /// Cloner placing checkouts under `root`
    #[must_use]
    pub fn new(root: &str) -> Self {
        Self {
            root: PathBuf::from(root),
            cloned: RefCell::default(),
        }
    }

    /// URLs cloned so far
    #[must_use]
    pub fn cloned(&self) -> Vec<String> {
        self.cloned.borrow().clone()
    }
}

impl RepoCloner for FakeCloner {
    fn clone_repo(&self, url: &str) -> Result<PathBuf> {
        let name = crate::backend::git::repo_name(url)
            .ok_or_else(|| BackendError::InvalidRemote(url.to_string()))?;
        self.cloned.borrow_mut().push(url.to_string());
        Ok(self.root.join(name))
    }
}

/// Writer that keeps every message in memory
#[derive(Debug, Default)]
pub struct BufferWriter {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl BufferWriter {
    /// Create an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages written so far, oldest first
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, level: MessageLevel, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, message.to_string()));
    }
}

impl OutputWriter for BufferWriter {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_writer_keeps_order_and_level() {
        let writer = BufferWriter::new();

        writer.info("Cloning widgets");
        writer.success("Created session 'widgets'");
        writer.error("tmux failed");

        let messages = writer.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0], (MessageLevel::Info, "Cloning widgets".to_string()));
        assert_eq!(messages[1].0, MessageLevel::Success);
        assert_eq!(messages[2].0, MessageLevel::Error);
    }
}
