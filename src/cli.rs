//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for mux-sesh using the `clap` crate.
//!
//! # Commands
//!
//! - **pick**: Interactive session picker (default)
//! - **list**: Print sessions or projects, optionally as JSON
//! - **config**: Show the effective configuration or its path
//! - **init**: Interactive setup wizard
//! - **completions**: Shell completion script
//!
//! # Examples
//!
//! ```
//! use mux_sesh::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["mux-sesh", "list", "--projects", "--json"]);
//! assert!(matches!(cli.get_command(), Commands::List { projects: true, json: true }));
//! ```

use crate::catalog::Source;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io::Write;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "mux-sesh")]
#[command(about = "Pick, create, and manage tmux sessions", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive picker (default)
    #[command(visible_alias = "p")]
    Pick {
        /// Start on project directories instead of sessions
        #[arg(long)]
        projects: bool,

        /// Print the chosen action as JSON instead of running it
        #[arg(long = "print-action")]
        print_action: bool,
    },

    /// Print sessions or projects without the picker
    #[command(visible_alias = "ls")]
    List {
        /// List project directories instead of sessions
        #[arg(long)]
        projects: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Run the interactive setup wizard
    Init,

    /// Generate a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
}

impl Commands {
    /// Catalog source implied by a `--projects` flag
    #[must_use]
    pub const fn source(projects: bool) -> Source {
        if projects {
            Source::Projects
        } else {
            Source::Sessions
        }
    }
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to the picker if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Pick {
            projects: false,
            print_action: false,
        })
    }
}

/// Write a completion script for `shell` to `buf`
pub fn generate_completions<W: Write>(shell: Shell, buf: &mut W) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, buf);
}
