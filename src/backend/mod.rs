//! External collaborators
//!
//! Thin wrappers around `tmux`, `git`, and the filesystem. None of them keep
//! state between calls; the picker engine owns all interaction state.

mod error;
mod traits;

pub mod git;
pub mod projects;
pub mod tmux;

pub use error::{BackendError, Result};
pub use git::GitCloner;
pub use projects::FsProjectScanner;
pub use tmux::TmuxBackend;
pub use traits::{
    ProjectSource, RepoCloner, SessionBackend, SessionDetails, SessionInfo, WindowInfo,
};

use std::process::{Command, Output};

/// Run a command to completion, capturing output
///
/// Non-zero exit is reported as `CommandFailed` with trimmed stderr.
pub(crate) fn run_captured(program: &str, args: &[&str]) -> Result<Output> {
    tracing::debug!(program, ?args, "running command");
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| BackendError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if output.status.success() {
        Ok(output)
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let detail = if stderr.is_empty() {
            output.status.to_string()
        } else {
            stderr
        };
        Err(BackendError::CommandFailed {
            program: program.to_string(),
            command: args.first().copied().unwrap_or_default().to_string(),
            detail,
        })
    }
}

/// Run a command with inherited stdio (used for attaching and cloning)
pub(crate) fn run_interactive(program: &str, args: &[&str]) -> Result<()> {
    tracing::debug!(program, ?args, "running interactive command");
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|source| BackendError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(BackendError::CommandFailed {
            program: program.to_string(),
            command: args.first().copied().unwrap_or_default().to_string(),
            detail: status.to_string(),
        })
    }
}
