//! Interactive setup wizard
//!
//! Walks through the handful of settings that differ between machines and
//! writes the result to the config file.

use super::MuxConfig;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;

fn read_input(prompt: &str, default: String) -> Result<String, ConfigError> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))
}

/// Split a comma-separated list of paths, dropping blanks
fn parse_path_list(raw: &str) -> Vec<PathBuf> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}

fn join_path_list(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prompt for project roots, clone directory, and editor command
///
/// Starts from `current` so re-running the wizard keeps earlier answers as
/// defaults.
///
/// # Errors
///
/// Returns `ConfigError` if user input cannot be read or the configuration
/// cannot be saved.
pub fn first_time_setup(current: &MuxConfig) -> Result<MuxConfig, ConfigError> {
    println!("Welcome to mux-sesh! Let's set up where your projects live.\n");

    let roots = read_input(
        "Project directories (comma separated)",
        join_path_list(&current.project_paths),
    )?;
    let repos = read_input(
        "Clone directory",
        current.repos_path.to_string_lossy().into_owned(),
    )?;
    let editor_cmd = read_input("Command for new sessions", current.editor_cmd.clone())?;

    let mut project_paths = parse_path_list(&roots);
    if project_paths.is_empty() {
        project_paths.clone_from(&current.project_paths);
    }

    let config = MuxConfig {
        project_paths,
        repos_path: if repos.trim().is_empty() {
            current.repos_path.clone()
        } else {
            PathBuf::from(repos.trim())
        },
        editor_cmd: editor_cmd.trim().to_string(),
        ..current.clone()
    };

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}
