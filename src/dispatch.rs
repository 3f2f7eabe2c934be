//! Running committed actions
//!
//! Happens after the picker has restored the terminal, so progress and
//! errors are plain output lines.

use crate::backend::{
    FsProjectScanner, GitCloner, RepoCloner, Result, SessionBackend, TmuxBackend,
};
use crate::config::MuxConfig;
use crate::picker::Action;
use crate::ui::output::OutputWriter;

/// The concrete collaborators, built from configuration
#[derive(Debug)]
pub struct Backends {
    /// tmux session control
    pub tmux: TmuxBackend,
    /// Project directory scanner
    pub scanner: FsProjectScanner,
    /// Remote repository cloner
    pub cloner: GitCloner,
}

impl Backends {
    /// Wire up the backends described by `config`
    #[must_use]
    pub fn from_config(config: &MuxConfig) -> Self {
        Self {
            tmux: TmuxBackend::new(config.editor_cmd.clone()),
            scanner: FsProjectScanner::new(config.project_roots())
                .with_max_depth(config.max_depth)
                .with_ignored(config.ignored_dirs.clone()),
            cloner: GitCloner::new(config.repos_dir()),
        }
    }
}

/// Run `action` and report progress through `out`
///
/// Returns the name of the session that ends up active.
///
/// # Errors
///
/// Returns `BackendError` from the first collaborator call that fails.
pub fn execute(
    action: &Action,
    sessions: &dyn SessionBackend,
    cloner: &dyn RepoCloner,
    out: &dyn OutputWriter,
) -> Result<String> {
    tracing::info!(%action, "executing");

    match action {
        Action::Switch(name) => {
            out.info(&format!("Switching to '{name}'"));
            sessions.switch_to(name)?;
            Ok(name.clone())
        }
        Action::CreateFromPath(path) => {
            out.info(&format!("Opening session in {}", path.display()));
            let name = sessions.create_at(path)?;
            out.success(&format!("Session '{name}' ready"));
            Ok(name)
        }
        Action::CreateNamed(name) => {
            out.info(&format!("Creating session '{name}'"));
            sessions.create_named(name)?;
            out.success(&format!("Session '{name}' ready"));
            Ok(name.clone())
        }
        Action::CloneAndCreate(url) => {
            out.info(&format!("Cloning {url}"));
            let path = cloner.clone_repo(url)?;
            out.success(&format!("Checked out {}", path.display()));
            let name = sessions.create_at(&path)?;
            out.success(&format!("Session '{name}' ready"));
            Ok(name)
        }
    }
}
