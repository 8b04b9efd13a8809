//! Accessibility attributes for the seek bar.

use crate::dom::NodeRef;
use crate::format::TimeFormatter;
use crate::playback::PlaybackHandle;

use super::position::{fraction_from_playback, NormalizedPosition};

/// Progress as announced to assistive technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibilityDescriptor {
    /// Percent played, two decimals, `"0.00"` to `"100.00"`
    pub value_now: String,
    /// Human readable position, e.g. `"1:05 of 3:20"`
    pub value_text: String,
}

/// Time the bar should display.
///
/// While scrubbing, the engine's live time can trail the requested seek by
/// several frames; the cached snapshot follows the pointer instead.
pub fn effective_time<P: PlaybackHandle + ?Sized>(handle: &P) -> f64 {
    if handle.scrubbing() {
        handle.cached_current_time()
    } else {
        handle.current_time()
    }
}

/// Fraction of the bar to fill, based on the effective time.
pub fn effective_fraction<P: PlaybackHandle + ?Sized>(handle: &P) -> NormalizedPosition {
    fraction_from_playback(effective_time(handle), handle.duration())
}

/// Compute the descriptor for the handle's current state.
pub fn describe<P: PlaybackHandle + ?Sized>(
    handle: &P,
    format: TimeFormatter,
) -> AccessibilityDescriptor {
    let time = effective_time(handle);
    let duration = handle.duration().unwrap_or(0.0);
    let fraction = fraction_from_playback(time, handle.duration());

    AccessibilityDescriptor {
        value_now: format!("{:.2}", fraction.percent()),
        value_text: format!("{} of {}", format(time, duration), format(duration, duration)),
    }
}

/// Write the descriptor onto `node`, replacing any previous values.
pub fn annotate<P: PlaybackHandle + ?Sized>(
    node: &NodeRef,
    handle: &P,
    format: TimeFormatter,
) -> AccessibilityDescriptor {
    let descriptor = describe(handle, format);
    let mut el = node.borrow_mut();
    el.set_attr("aria-valuenow", descriptor.value_now.clone());
    el.set_attr("aria-valuetext", descriptor.value_text.clone());
    descriptor
}
