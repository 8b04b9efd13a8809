//! Width measurement in terminal columns.

use std::cell::Cell;

use crate::control::class;
use crate::dom::{parse_percent, parse_px, Measure, NodeRef};

/// Class of the player root element.
pub const PLAYER_CLASS: &str = "video-js";

/// Measures control elements against the current screen layout.
///
/// The player is as wide as the terminal; the play-progress bar is its
/// percentage of the bar width; the tooltip label is its text plus one
/// column of padding on each side.
#[derive(Debug, Default)]
pub struct TerminalMeasure {
    screen_cols: Cell<u16>,
    bar_cols: Cell<u16>,
}

impl TerminalMeasure {
    pub fn new(screen_cols: u16, bar_cols: u16) -> Self {
        Self {
            screen_cols: Cell::new(screen_cols),
            bar_cols: Cell::new(bar_cols),
        }
    }

    /// Update after a resize.
    pub fn resize(&self, screen_cols: u16, bar_cols: u16) {
        self.screen_cols.set(screen_cols);
        self.bar_cols.set(bar_cols);
    }
}

impl Measure for TerminalMeasure {
    fn width(&self, node: &NodeRef) -> f64 {
        let el = node.borrow();
        if el.has_class(PLAYER_CLASS) {
            return self.screen_cols.get() as f64;
        }
        if el.has_class(class::TIME_TOOLTIP) {
            return (el.text.chars().count() + 2) as f64;
        }
        match el.style("width") {
            Some(w) => parse_percent(w)
                .map(|f| (f * self.bar_cols.get() as f64).round())
                .or_else(|| parse_px(w))
                .unwrap_or(0.0),
            None => 0.0,
        }
    }
}
