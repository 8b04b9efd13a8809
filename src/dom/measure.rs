//! Width measurement of rendered elements.

use std::collections::HashMap;

use super::element::NodeRef;

/// Answers "how wide is this node right now" in host units.
///
/// In a browser this is the computed pixel width; in the terminal host it is
/// a column count. The control only ever asks for widths.
pub trait Measure {
    /// Current rendered width of `node`.
    fn width(&self, node: &NodeRef) -> f64;
}

/// Measurement double keyed by class name.
///
/// Nodes carrying none of the registered classes measure as their own
/// `width` style: pixel values as is, percentages against the bar width
/// when one is set, otherwise 0.
#[derive(Debug, Clone, Default)]
pub struct FixedMeasure {
    widths: HashMap<String, f64>,
    bar_width: Option<f64>,
}

impl FixedMeasure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fixed width for nodes with `class`.
    pub fn with(mut self, class: &str, width: f64) -> Self {
        self.widths.insert(class.to_string(), width);
        self
    }

    /// Resolve percentage widths against a bar `width` wide.
    pub fn with_bar_width(mut self, width: f64) -> Self {
        self.bar_width = Some(width);
        self
    }

    fn style_width(&self, value: &str) -> Option<f64> {
        parse_px(value).or_else(|| Some(parse_percent(value)? * self.bar_width?))
    }
}

impl Measure for FixedMeasure {
    fn width(&self, node: &NodeRef) -> f64 {
        let el = node.borrow();
        el.classes
            .iter()
            .find_map(|c| self.widths.get(c).copied())
            .or_else(|| el.style("width").and_then(|w| self.style_width(w)))
            .unwrap_or(0.0)
    }
}

/// Parse a `"12.5px"` style value.
pub fn parse_px(value: &str) -> Option<f64> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}

/// Parse a `"12.50%"` style value into a fraction.
pub fn parse_percent(value: &str) -> Option<f64> {
    let pct: f64 = value.trim().strip_suffix('%')?.trim().parse().ok()?;
    Some(pct / 100.0)
}
