//! Theme configuration for the terminal host and CLI
//!
//! Centralizes all color and style definitions.
//! Provides both ratatui styles (for the TUI) and ANSI escape codes (for CLI output).

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (time display, tooltip label)
    pub text_primary: Color,
    /// Secondary/dimmed text color (footer, status)
    pub text_secondary: Color,
    /// Played portion of the bar
    pub accent: Color,
    /// Unplayed portion of the bar
    pub track: Color,
    /// Scrub thumb
    pub thumb: Color,
    /// Error/warning color
    pub error: Color,
    /// Background color (usually default/transparent)
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    /// Default theme - green fill on a dark gray track.
    pub fn standard() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            track: Color::DarkGray,
            thumb: Color::White,
            error: Color::Red,
            background: Color::Reset,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            track: Color::DarkGray,
            thumb: Color::White,
            error: Color::Red,
            background: Color::Reset,
        }
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for the played part of the bar.
    pub fn fill_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for the unplayed part of the bar.
    pub fn track_style(&self) -> Style {
        Style::default().fg(self.track)
    }

    /// Style for the scrub thumb; bold while dragging.
    pub fn thumb_style(&self, sliding: bool) -> Style {
        let style = Style::default().fg(self.thumb);
        if sliding {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Style for bold accented text (keybindings, etc).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    // ANSI color helpers for CLI output

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }
}

/// Wrap `text` in the color's escape codes. `Color::Reset` leaves it plain.
fn paint(color: Color, text: &str) -> String {
    if color == Color::Reset {
        return text.to_string();
    }
    format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // Colors no theme uses fall back to no color
        _ => "",
    }
}

/// Theme in effect. `NO_COLOR` turns CLI text colors off.
pub fn current_theme() -> Theme {
    if std::env::var_os("NO_COLOR").is_some() {
        return Theme {
            text_primary: Color::Reset,
            text_secondary: Color::Reset,
            ..Theme::default()
        };
    }
    Theme::default()
}
