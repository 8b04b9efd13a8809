//! Keeps the floating time tooltip inside the player.
//!
//! The tooltip track is an invisible bar that mirrors the play-progress width;
//! the label hangs off its right edge, centred on the scrub thumb. Near either
//! end of the bar the label would overflow the player, so the track's width is
//! bounded by the label's half-width on both sides.

use crate::dom::{Measure, NodeRef};

/// Derived styles for the tooltip track, in host units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipGeometry {
    pub max_width: f64,
    pub min_width: f64,
    pub right_offset: f64,
}

impl TooltipGeometry {
    /// Geometry for a player `player_width` wide and a label `tooltip_width` wide.
    pub fn compute(player_width: f64, tooltip_width: f64) -> Self {
        let half = tooltip_width / 2.0;
        Self {
            max_width: (player_width - half).floor(),
            min_width: half.ceil(),
            right_offset: -half,
        }
    }
}

/// Nodes the coordinator reads and writes.
#[derive(Debug, Clone)]
pub struct TooltipCoordinator {
    /// Outermost player element, measured for `P`
    pub player: NodeRef,
    /// Play-progress bar whose width is mirrored
    pub play_progress: NodeRef,
    /// Tooltip track receiving the derived styles
    pub track: NodeRef,
    /// Tooltip label, measured for `T`
    pub label: NodeRef,
}

impl TooltipCoordinator {
    /// Recompute and apply the track geometry.
    ///
    /// Must run on every refresh: the label's width follows the length of the
    /// formatted time it shows.
    pub fn refresh(&self, measure: &dyn Measure) -> TooltipGeometry {
        let bar_width = measure.width(&self.play_progress);
        let player_width = measure.width(&self.player);
        let tooltip_width = measure.width(&self.label);
        let geometry = TooltipGeometry::compute(player_width, tooltip_width);

        let mut track = self.track.borrow_mut();
        track.set_style("width", px(bar_width));
        track.set_style("max-width", px(geometry.max_width));
        track.set_style("min-width", px(geometry.min_width));
        track.set_style("right", px(geometry.right_offset));

        geometry
    }
}

fn px(value: f64) -> String {
    format!("{}px", value)
}
