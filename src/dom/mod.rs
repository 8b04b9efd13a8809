//! Minimal element tree used by the progress control.
//!
//! The control never renders anything itself. It writes classes, attributes,
//! styles and text onto these nodes, and a host (the terminal front end, or a
//! test) reads them back to draw or assert.

mod element;
mod measure;

pub use element::{Element, NodeRef};
pub use measure::{parse_percent, parse_px, FixedMeasure, Measure};
