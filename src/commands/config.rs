//! Config subcommands handler

use std::path::Path;

use anyhow::Result;

use seekbar::tui::current_theme;
use seekbar::Config;

/// Load the config from `path`, or from the default location.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(path: Option<&Path>) -> Result<()> {
    let config = load(path)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(config.to_toml()?.trim_end()));
    Ok(())
}

/// Print where the config file is read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };
    let theme = current_theme();
    let note = if path.exists() { "" } else { " (not created yet)" };
    println!(
        "{}{}",
        theme.primary_text(&path.display().to_string()),
        theme.secondary_text(note)
    );
    Ok(())
}
