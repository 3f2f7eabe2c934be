//! Configuration module for mux-sesh
//!
//! Manages where projects are searched for, where remotes are cloned, and
//! what runs in new sessions. Configuration is stored in the user's config
//! directory (`~/.config/mux-sesh/config.toml` on Linux) and can be
//! overridden with `MUX_SESH_*` environment variables.

mod setup;

pub use setup::first_time_setup;

use crate::backend::projects::{DEFAULT_IGNORED_DIRS, DEFAULT_MAX_DEPTH};
use crate::picker::DEFAULT_MAX_RESULTS;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Editor command typed into freshly created sessions
pub const DEFAULT_EDITOR_CMD: &str =
    "nvim -c \"lua if pcall(require, 'telescope') then vim.cmd('Telescope find_files') end\"";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MuxConfig {
    /// Roots searched for project directories (`~` is expanded)
    pub project_paths: Vec<PathBuf>,

    /// Directory remote repositories are cloned into
    pub repos_path: PathBuf,

    /// Command sent to new sessions; empty disables it
    pub editor_cmd: String,

    /// How many levels below each root are scanned
    pub max_depth: usize,

    /// Directory names skipped while scanning
    pub ignored_dirs: Vec<String>,

    /// Rows shown while searching
    pub max_results: usize,
}

impl Default for MuxConfig {
    fn default() -> Self {
        Self {
            project_paths: vec![PathBuf::from("~/dev"), PathBuf::from("~/personal")],
            repos_path: PathBuf::from("~/dev/repos"),
            editor_cmd: DEFAULT_EDITOR_CMD.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            ignored_dirs: DEFAULT_IGNORED_DIRS.iter().map(ToString::to_string).collect(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl MuxConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("mux-sesh").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!(path = %config_path.display(), "writing default configuration");
            Self::default().save_to(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file plus environment overrides
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or environment cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix("MUX_SESH")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("project_paths")
                    .with_list_parse_key("ignored_dirs"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Project roots with `~` expanded
    #[must_use]
    pub fn project_roots(&self) -> Vec<PathBuf> {
        self.project_paths.iter().map(|p| expand_tilde(p)).collect()
    }

    /// Clone directory with `~` expanded
    #[must_use]
    pub fn repos_dir(&self) -> PathBuf {
        expand_tilde(&self.repos_path)
    }
}

/// Expand a leading `~` to the home directory
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) if rest.as_os_str().is_empty() => home,
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
