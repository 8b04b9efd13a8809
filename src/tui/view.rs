//! Draws the progress control's element tree into a ratatui buffer.
//!
//! Nothing here decides where the play head is. Fill width, tooltip text and
//! tooltip bounds are all read back from the nodes the control wrote.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::control::{slider::SLIDING_CLASS, ProgressControl};
use crate::dom::{parse_percent, parse_px, NodeRef};
use crate::playback::PlaybackHandle;

use super::layout::ScreenLayout;
use super::theme::Theme;

const FILL: &str = "━";
const TRACK: &str = "─";
const THUMB: &str = "⏺";

/// Number of filled cells and the thumb column (relative to the bar).
///
/// # Returns
/// `(filled, thumb)` where `thumb` is `None` for an empty bar
pub fn bar_cells(width: u16, fraction: f64) -> (u16, Option<u16>) {
    if width == 0 {
        return (0, None);
    }
    let filled = ((width as f64) * fraction.clamp(0.0, 1.0)) as u16;
    let thumb = filled.min(width - 1);
    (filled, Some(thumb))
}

/// Left column of the tooltip label, in screen coordinates. May be negative
/// or run past the screen when the label is not kept inside.
///
/// # Arguments
/// * `bar_x` - First column of the bar
/// * `fill_cols` - Played width in columns
/// * `label_cols` - Label width in columns
/// * `track` - Tooltip track node, carrying bounds if they were computed
pub fn tooltip_left(bar_x: u16, fill_cols: u16, label_cols: u16, track: &NodeRef) -> i32 {
    let el = track.borrow();
    let center = bar_x as f64 + fill_cols as f64;
    let bounded = match (
        el.style("min-width").and_then(parse_px),
        el.style("max-width").and_then(parse_px),
        el.style("right").and_then(parse_px),
    ) {
        (Some(min), Some(max), Some(right)) if min <= max => {
            Some(center.clamp(min, max) + right)
        }
        _ => None,
    };
    let left = bounded.unwrap_or(center - label_cols as f64 / 2.0);
    left.floor() as i32
}

/// Write `text` starting at column `left`, clipped to `area`.
fn put_clipped(buf: &mut Buffer, area: Rect, left: i32, text: &str, style: Style) {
    let start = area.x as i32;
    let end = (area.x + area.width) as i32;
    for (i, ch) in text.chars().enumerate() {
        let x = left + i as i32;
        if x >= start && x < end {
            buf.set_string(x as u16, area.y, ch.to_string(), style);
        }
    }
}

/// Render the bar row and the tooltip row.
pub fn render_bar<P: PlaybackHandle>(
    buf: &mut Buffer,
    layout: &ScreenLayout,
    control: &ProgressControl<P>,
    theme: &Theme,
) {
    let seek_bar = control.seek_bar();
    let bar = layout.bar;
    let fraction = seek_bar
        .play_progress()
        .borrow()
        .style("width")
        .and_then(parse_percent)
        .unwrap_or(0.0);
    let sliding = seek_bar.el().borrow().has_class(SLIDING_CLASS);

    let (filled, thumb) = bar_cells(bar.width, fraction);
    for i in 0..bar.width {
        let (symbol, style) = if Some(i) == thumb {
            (THUMB, theme.thumb_style(sliding))
        } else if i < filled {
            (FILL, theme.fill_style())
        } else {
            (TRACK, theme.track_style())
        };
        buf.set_string(bar.x + i, bar.y, symbol, style);
    }

    let label = format!(" {} ", seek_bar.tooltip_label().borrow().text);
    let label_cols = label.chars().count() as u16;
    let left = tooltip_left(bar.x, filled, label_cols, seek_bar.tooltip_track());
    put_clipped(buf, layout.tooltip, left, &label, theme.text_style());
}

/// Render the time row: current time display and duration.
pub fn render_time(
    buf: &mut Buffer,
    area: Rect,
    time_display: &NodeRef,
    duration: &str,
    theme: &Theme,
) {
    let text = format!("{} / {}", time_display.borrow().text, duration);
    buf.set_stringn(area.x, area.y, text, area.width as usize, theme.text_style());
}

/// Accessibility attributes of the holder, for the status row.
pub fn aria_summary(holder: &NodeRef) -> String {
    let el = holder.borrow();
    format!(
        "{} {}% ({})",
        el.attr("role").unwrap_or("-"),
        el.attr("aria-valuenow").unwrap_or("-"),
        el.attr("aria-valuetext").unwrap_or("-"),
    )
}
