//! Remote repository references and cloning

use super::error::{BackendError, Result};
use super::run_interactive;
use super::traits::RepoCloner;
use std::fs;
use std::path::PathBuf;

/// Accepted remote prefixes: hosted web URL and SCP-style form
const REMOTE_PREFIXES: &[&str] = &["https://github.com/", "git@github.com:"];

/// Whether `input` names a clonable remote repository
///
/// Only the prefix is checked, so a reference missing its repository
/// segment is still recognized (and later rejected by the cloner).
#[must_use]
pub fn is_remote_reference(input: &str) -> bool {
    let input = input.trim();
    REMOTE_PREFIXES.iter().any(|prefix| input.starts_with(prefix))
}

/// Repository name of a remote reference
///
/// The name is the segment after the owner, with a trailing `.git` removed.
///
/// # Examples
/// ```
/// use mux_sesh::backend::git::repo_name;
///
/// assert_eq!(repo_name("https://github.com/acme/widgets"), Some("widgets".to_string()));
/// assert_eq!(repo_name("git@github.com:acme/widgets.git"), Some("widgets".to_string()));
/// assert_eq!(repo_name("https://github.com/acme"), None);
/// ```
#[must_use]
pub fn repo_name(input: &str) -> Option<String> {
    let input = input.trim();
    let path = REMOTE_PREFIXES
        .iter()
        .find_map(|prefix| input.strip_prefix(prefix))?;
    let path = path.strip_suffix(".git").unwrap_or(path);

    let mut segments = path.split('/');
    let _owner = segments.next()?;
    let name = segments.next()?;
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Clones remotes into a single repositories directory
#[derive(Debug, Clone)]
pub struct GitCloner {
    repos_path: PathBuf,
}

impl GitCloner {
    /// Create a cloner that places checkouts under `repos_path`
    #[must_use]
    pub const fn new(repos_path: PathBuf) -> Self {
        Self { repos_path }
    }

    /// Local checkout path for a remote reference
    ///
    /// # Errors
    /// Returns `BackendError::InvalidRemote` if no repository name can be extracted.
    pub fn target_dir(&self, url: &str) -> Result<PathBuf> {
        let name =
            repo_name(url).ok_or_else(|| BackendError::InvalidRemote(url.trim().to_string()))?;
        Ok(self.repos_path.join(name))
    }
}

impl RepoCloner for GitCloner {
    fn clone_repo(&self, url: &str) -> Result<PathBuf> {
        let target = self.target_dir(url)?;
        fs::create_dir_all(&self.repos_path)?;

        if target.exists() {
            tracing::info!(target = %target.display(), "reusing existing checkout");
            return Ok(target);
        }

        tracing::info!(url = url.trim(), target = %target.display(), "cloning repository");
        let target_str = target.to_string_lossy().into_owned();
        run_interactive("git", &["clone", url.trim(), &target_str])?;
        Ok(target)
    }
}
