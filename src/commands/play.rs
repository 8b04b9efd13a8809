//! `play` subcommand: run the terminal player

use std::path::Path;

use anyhow::Result;
use tracing::info;

use seekbar::tui::{self, PlayOptions, Theme};

use crate::cli::{PlayArgs, ThemeName};

/// Run the player with the config file plus command-line overrides.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &PlayArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = super::config::load(config_path)?;

    if let Some(duration) = args.duration {
        config.player.duration = duration;
    }
    if args.keep_tooltips_inside {
        config.progress_control.keep_tooltips_inside = true;
    }
    if args.paused {
        config.player.autoplay = false;
    }

    // Covers values from the file as well as the override
    config.player.validate()?;

    let theme = match args.theme {
        ThemeName::Standard => Theme::standard(),
        ThemeName::Ocean => Theme::ocean(),
    };

    info!(?args, "starting player");
    tui::run(
        &config,
        PlayOptions {
            restricted_surface: args.restricted_surface,
            theme,
        },
    )
}
