//! seekbar CLI entry point

mod cli;
mod commands;

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ConfigCommands};

/// Install the tracing subscriber when a log file is given.
///
/// The player owns the terminal, so logs never go to stdout or stderr.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config_path = cli.config.as_deref();
    match &cli.command {
        Commands::Play(args) => commands::play::handle(args, config_path),
        Commands::Config(ConfigCommands::Show) => commands::config::handle_show(config_path),
        Commands::Config(ConfigCommands::Path) => commands::config::handle_path(config_path),
    }
}
