//! mux-sesh CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Pick a session interactively (default command)
//! mux-sesh
//! mux-sesh pick --projects
//!
//! # Print sessions or projects
//! mux-sesh list
//! mux-sesh list --projects --json
//!
//! # Configuration
//! mux-sesh init
//! mux-sesh config show
//! ```
//!
//! # Configuration
//!
//! On first run a default configuration is written to the user's config
//! directory (`~/.config/mux-sesh/config.toml` on Linux).

use mux_sesh::{
    MuxError,
    catalog::Catalog,
    cli::{Cli, Commands, ConfigCommands, generate_completions},
    config::{MuxConfig, first_time_setup},
    dispatch::{Backends, execute},
    logging,
    picker::{Picker, PickerOptions},
    ui::{OutputWriter, SessionFinder, StdoutWriter},
};
use std::io;

type Result<T> = std::result::Result<T, MuxError>;

fn run_picker(
    config: &MuxConfig,
    projects: bool,
    print_action: bool,
    out: &dyn OutputWriter,
) -> Result<()> {
    let backends = Backends::from_config(config);
    let options = PickerOptions {
        max_results: config.max_results,
        initial_source: Commands::source(projects),
        ..PickerOptions::default()
    };

    let mut picker = Picker::new(&backends.tmux, &backends.scanner, options);
    let Some(action) = SessionFinder::new().run(&mut picker, &backends.tmux)? else {
        return Ok(());
    };

    if print_action {
        out.write(&serde_json::to_string(&action)?);
        return Ok(());
    }

    execute(&action, &backends.tmux, &backends.cloner, out)?;
    Ok(())
}

fn run_list(config: &MuxConfig, projects: bool, json: bool, out: &dyn OutputWriter) -> Result<()> {
    let backends = Backends::from_config(config);
    let catalog = if projects {
        Catalog::projects(&backends.scanner)?
    } else {
        Catalog::sessions(&backends.tmux)?
    };

    if json {
        out.write(&serde_json::to_string_pretty(catalog.entries())?);
        return Ok(());
    }

    if catalog.is_empty() {
        out.info(&format!("No {} found", Commands::source(projects)));
        return Ok(());
    }
    for entry in catalog.entries() {
        if entry.is_session() {
            let marker = if entry.attached { "●" } else { "○" };
            let plural = if entry.window_count == 1 { "" } else { "s" };
            out.write(&format!(
                "{marker} {}  ({} window{plural})",
                entry.title, entry.window_count
            ));
        } else {
            out.write(&format!("{}  {}", entry.title, entry.description));
        }
    }
    Ok(())
}

fn run(cli: &Cli, out: &dyn OutputWriter) -> Result<()> {
    let command = cli.get_command();

    if let Commands::Completions { shell } = command {
        generate_completions(shell, &mut io::stdout());
        return Ok(());
    }

    if let Err(e) = logging::init_file_logging() {
        out.warning(&format!("Logging disabled: {e}"));
    }

    match command {
        Commands::Init => {
            let current = MuxConfig::load().unwrap_or_default();
            first_time_setup(&current)?;
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                out.write(&MuxConfig::config_path()?.display().to_string());
            }
            ConfigCommands::Show => {
                let config = MuxConfig::load()?;
                let rendered = toml::to_string_pretty(&config)
                    .map_err(|e| ::config::ConfigError::Message(e.to_string()))?;
                out.write(rendered.trim_end());
            }
        },
        Commands::List { projects, json } => {
            run_list(&MuxConfig::load()?, projects, json, out)?;
        }
        Commands::Pick {
            projects,
            print_action,
        } => {
            run_picker(&MuxConfig::load()?, projects, print_action, out)?;
        }
        Commands::Completions { .. } => {}
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse_args();
    let out = StdoutWriter::new();

    if let Err(e) = run(&cli, &out) {
        tracing::error!(error = %e, "command failed");
        out.error(&e.to_string());
        std::process::exit(1);
    }
}
