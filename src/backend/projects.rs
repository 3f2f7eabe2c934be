//! Project directory discovery

use super::error::Result;
use super::traits::ProjectSource;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory names that never become project candidates
pub const DEFAULT_IGNORED_DIRS: &[&str] = &["node_modules", "target", "build", "dist"];

/// Default walk depth below each root
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Walks the configured roots for candidate project directories
#[derive(Debug, Clone)]
pub struct FsProjectScanner {
    roots: Vec<PathBuf>,
    max_depth: usize,
    ignored: Vec<String>,
}

impl FsProjectScanner {
    /// Create a scanner over `roots` with the default depth and ignore list
    #[must_use]
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            max_depth: DEFAULT_MAX_DEPTH,
            ignored: DEFAULT_IGNORED_DIRS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Set the maximum depth below each root (1 = direct children only)
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Replace the ignored directory names
    #[must_use]
    pub fn with_ignored(mut self, ignored: Vec<String>) -> Self {
        self.ignored = ignored;
        self
    }

    fn is_excluded(&self, name: &str) -> bool {
        name.starts_with('.') || self.ignored.iter().any(|ignored| ignored == name)
    }

    fn scan_root(&self, root: &Path, found: &mut Vec<PathBuf>) {
        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(self.max_depth)
            .follow_links(false)
            .into_iter()
            // the root itself is never pruned, even under a dot-prefixed name
            .filter_entry(|e| {
                e.depth() == 0 || !self.is_excluded(&e.file_name().to_string_lossy())
            });

        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_dir() => found.push(entry.into_path()),
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable directory");
                }
            }
        }
    }
}

impl ProjectSource for FsProjectScanner {
    fn list_projects(&self) -> Result<Vec<PathBuf>> {
        let mut found = Vec::new();
        for root in self.roots.iter().filter(|root| root.is_dir()) {
            self.scan_root(root, &mut found);
        }
        tracing::debug!(count = found.len(), "project scan finished");
        Ok(found)
    }
}
