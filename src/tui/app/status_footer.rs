//! Status line and footer rendering for the player screen
//!
//! The status line shows the scrub state and which top-level listeners are
//! registered; the footer shows keybinding hints.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::control::{ListenerKind, ScrubState, TopLevelSurface};
use crate::tui::theme::Theme;

/// Compose the status text for the current scrub state.
pub fn status_text(state: ScrubState, surface: &TopLevelSurface, aria: &str) -> String {
    let scrub = match state {
        ScrubState::Idle => "idle".to_string(),
        ScrubState::Scrubbing(session) => format!(
            "scrubbing (resume: {})",
            if session.was_playing { "yes" } else { "no" }
        ),
    };

    let listeners: Vec<&str> = ListenerKind::ALL
        .iter()
        .filter(|k| surface.is_listening(**k))
        .map(|k| k.name())
        .collect();
    let listeners = if listeners.is_empty() {
        "none".to_string()
    } else {
        listeners.join(", ")
    };

    let boundary = if surface.is_restricted() {
        " | surface: restricted"
    } else {
        ""
    };

    format!("{} | listeners: {}{} | {}", scrub, listeners, boundary, aria)
}

/// Render the status line.
///
/// Uses the error color while the surface is restricted, since drags then
/// only track the bar itself.
pub fn render_status_line(
    frame: &mut Frame,
    area: Rect,
    text: &str,
    restricted: bool,
    theme: &Theme,
) {
    let style = if restricted {
        theme.error_style()
    } else {
        theme.text_secondary_style()
    };
    frame.render_widget(Paragraph::new(text.to_string()).style(style), area);
}

/// Render a centered footer with keybinding hints.
///
/// Example: `&[("q", "quit"), ("space", "play/pause")]` renders as
/// `"q: quit | space: play/pause"`.
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)], theme: &Theme) {
    let spans: Vec<Span<'static>> = build_footer_spans(keys, theme);
    let footer = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(theme.text_secondary))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Build styled spans for footer keybinding hints.
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " | ".to_string(),
                Style::default().fg(theme.text_secondary),
            ));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_bold_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            Style::default().fg(theme.text_secondary),
        ));
    }
    spans
}
