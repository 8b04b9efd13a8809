//! TUI (Text User Interface) host for the progress control
//!
//! Puts a seek bar at the bottom of the terminal and drives it with mouse and
//! keyboard input through ratatui/crossterm. The control itself knows nothing
//! about terminals; this module supplies its measurement, its surface and its
//! rendering.

pub mod app;
pub mod layout;
pub mod measure;
pub mod theme;
pub mod view;

pub use app::{run, PlayOptions, PlayerApp};
pub use theme::{current_theme, Theme};
