//! Mapping between pointer geometry, playback time and bar fractions.

use std::fmt;

/// A playback position as a fraction of the bar, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct NormalizedPosition(f64);

impl NormalizedPosition {
    pub const START: Self = Self(0.0);
    pub const END: Self = Self(1.0);

    /// Clamp `raw` into `[0, 1]`. NaN maps to 0.
    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::START;
        }
        Self(raw.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Percentage in `[0, 100]`.
    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }
}

impl fmt::Display for NormalizedPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.percent())
    }
}

/// Axis a slider runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Left to right
    #[default]
    Horizontal,
    /// Bottom to top
    Vertical,
}

/// Pointer location in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding box of the bar in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Project `pointer` onto the bar's axis.
///
/// The pointer may be anywhere on screen, including outside the bar while a
/// drag continues on the top-level surface; the result is clamped. A bar of
/// zero length maps everything to the start.
pub fn fraction_from_pointer(
    pointer: Pointer,
    bounds: Bounds,
    orientation: Orientation,
) -> NormalizedPosition {
    let (distance, length) = match orientation {
        Orientation::Horizontal => (pointer.x - bounds.x, bounds.width),
        Orientation::Vertical => (bounds.y + bounds.height - pointer.y, bounds.height),
    };
    if length <= 0.0 {
        return NormalizedPosition::START;
    }
    NormalizedPosition::new(distance / length)
}

/// Fraction of the media played so far.
///
/// Times past the end map to exactly 1. A duration that is unknown, zero,
/// negative or not finite maps to 0.
pub fn fraction_from_playback(current_time: f64, duration: Option<f64>) -> NormalizedPosition {
    match duration {
        Some(d) if d.is_finite() && d > 0.0 => NormalizedPosition::new(current_time / d),
        _ => NormalizedPosition::START,
    }
}
