//! The `pathwise` command-line application.
//!
//! Reads a JSON snapshot of one user (profile, preferences, recent activity)
//! and candidate catalogs, ranks them with `pathwise-engine` and prints the
//! result. Settings come from `~/.pathwise/config.toml`; see [`config`].

mod cli;
mod commands;
pub mod config;
pub mod snapshot;

pub use cli::{Cli, Commands, OutputFormat};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// The main entry point for the `pathwise` application.
pub fn run() -> Result<()> {
    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Explore {
            input,
            limit,
            compact,
        } => commands::handle_explore_command(&input, limit, compact, &settings()?),
        Commands::Search {
            input,
            limit,
            format,
        } => commands::handle_search_command(&input, limit, format, &settings()?),
        Commands::Context { input } => commands::handle_context_command(&input, &settings()?),
        Commands::Skills {
            label,
            have,
            format,
        } => commands::handle_skills_command(label.as_deref(), have.as_deref(), format),
    }
}

/// Loaded config, or defaults when no file exists.
fn settings() -> Result<config::Config> {
    Ok(config::load_config()?.unwrap_or_default())
}
