//! Generic slider behaviour.
//!
//! The seek bar is a slider with scrub semantics layered on top. It owns a
//! `Slider` and delegates the parts that are not seek specific: creating the
//! node, mapping pointer positions, the sliding class, and drawing the fill.

use crate::dom::{Element, NodeRef};

use super::position::{fraction_from_pointer, Bounds, NormalizedPosition, Orientation, Pointer};

/// Class present on the slider while a drag is active.
pub const SLIDING_CLASS: &str = "vjs-sliding";

#[derive(Debug, Clone)]
pub struct Slider {
    el: NodeRef,
    bar: NodeRef,
    orientation: Orientation,
    bounds: Bounds,
}

impl Slider {
    /// Wrap `bar` (the fill element) in a new slider node.
    ///
    /// # Arguments
    /// * `class` - Extra classes for the slider node
    /// * `bar` - Element whose width tracks the slider value
    /// * `orientation` - Axis the slider runs along
    pub fn new(class: &str, bar: NodeRef, orientation: Orientation) -> Self {
        Self {
            el: Self::create_node(class, orientation),
            bar,
            orientation,
            bounds: Bounds::default(),
        }
    }

    /// Create the slider's own node with its accessibility role.
    pub fn create_node(class: &str, orientation: Orientation) -> NodeRef {
        let node = Element::create("div", class);
        {
            let mut el = node.borrow_mut();
            el.add_class("vjs-slider");
            el.add_class(match orientation {
                Orientation::Horizontal => "vjs-slider-horizontal",
                Orientation::Vertical => "vjs-slider-vertical",
            });
            el.set_attr("role", "slider");
            el.set_attr("tabindex", "0");
            el.set_attr("aria-valuemin", "0");
            el.set_attr("aria-valuemax", "100");
            el.set_attr("aria-valuenow", "0");
        }
        node
    }

    pub fn el(&self) -> &NodeRef {
        &self.el
    }

    pub fn bar(&self) -> &NodeRef {
        &self.bar
    }

    /// Where the host laid the slider out. Updated on every layout change.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Position of `pointer` along the slider, clamped.
    pub fn calculate_distance(&self, pointer: Pointer) -> NormalizedPosition {
        fraction_from_pointer(pointer, self.bounds, self.orientation)
    }

    /// Base drag-start behaviour.
    pub fn handle_mouse_down(&mut self) {
        self.el.borrow_mut().add_class(SLIDING_CLASS);
    }

    /// Base drag-end behaviour.
    pub fn handle_mouse_up(&mut self) {
        self.el.borrow_mut().remove_class(SLIDING_CLASS);
    }

    /// Draw the fill for `progress`.
    pub fn update(&self, progress: NormalizedPosition) {
        let prop = match self.orientation {
            Orientation::Horizontal => "width",
            Orientation::Vertical => "height",
        };
        self.bar
            .borrow_mut()
            .set_style(prop, format!("{:.2}%", progress.percent()));
    }
}
