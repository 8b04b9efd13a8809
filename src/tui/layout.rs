//! Screen layout for the terminal host.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::control::{Bounds, Pointer};

/// Columns kept free on either side of the bar.
pub const BAR_MARGIN: u16 = 2;

/// Areas of the player screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title and playback state
    pub header: Rect,
    /// Floating time tooltip, directly above the bar
    pub tooltip: Rect,
    /// The seek bar's own element
    pub bar: Rect,
    /// Current time / duration
    pub time: Rect,
    /// Scrub state and surface listeners
    pub status: Rect,
    /// Key hints
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let inset = |r: Rect| Rect {
            x: r.x + BAR_MARGIN.min(r.width / 2),
            width: r.width.saturating_sub(BAR_MARGIN * 2),
            ..r
        };

        Self {
            header: rows[0],
            tooltip: rows[2],
            bar: inset(rows[3]),
            time: inset(rows[4]),
            status: rows[5],
            footer: rows[6],
        }
    }

    /// The bar in control coordinates.
    ///
    /// Runs from the centre of the first bar cell to the centre of the last,
    /// so those two columns land on the start and the end.
    pub fn bar_bounds(&self) -> Bounds {
        Bounds::new(
            self.bar.x as f64 + 0.5,
            self.bar.y as f64,
            self.bar.width.saturating_sub(1) as f64,
            self.bar.height as f64,
        )
    }

    /// Whether the cell at `column`, `row` belongs to the bar.
    pub fn on_bar(&self, column: u16, row: u16) -> bool {
        self.bar.contains(Position::new(column, row))
    }
}

/// Pointer position at the centre of a terminal cell.
pub fn cell_pointer(column: u16, row: u16) -> Pointer {
    Pointer::new(column as f64 + 0.5, row as f64 + 0.5)
}
