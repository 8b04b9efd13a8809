//! Command-line interface definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Version with git SHA and build date (dev builds)
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("SEEKBAR_BUILD_DATE"),
    ")"
);

/// Version with build date only (release builds)
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SEEKBAR_BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(name = "seekbar", version = VERSION)]
#[command(about = "Scrubbable media progress bar in the terminal")]
pub struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (filter with RUST_LOG, default "warn")
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play a simulated media clip with a draggable progress bar
    Play(PlayArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Media length in seconds (overrides the config file)
    #[arg(long, value_name = "SECONDS")]
    pub duration: Option<f64>,

    /// Keep the time tooltip inside the player's width
    #[arg(long)]
    pub keep_tooltips_inside: bool,

    /// Refuse listeners on the whole screen, as an embedded player would see;
    /// drags then only track while the pointer stays on the bar
    #[arg(long)]
    pub restricted_surface: bool,

    /// Start paused
    #[arg(long)]
    pub paused: bool,

    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeName::Standard)]
    pub theme: ThemeName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeName {
    Standard,
    Ocean,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
}
