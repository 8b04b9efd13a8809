//! Refresh paths for the progress control.
//!
//! Two paths keep the bar current. Outside a drag, engine notifications
//! trigger a full recompute. During a drag the seek bar pushes a [`Seek`] to
//! its refresh hooks directly after every seek, since the engine's time
//! notification is best effort and may not fire for each one.

use crate::playback::PlaybackNotification;

/// A seek issued by the scrub state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seek {
    /// Applied target in seconds
    pub time: f64,
    /// Duration the target was computed against
    pub duration: f64,
}

/// Callback run after every scrub seek.
///
/// The composing parent registers hooks for whichever sibling widgets must
/// follow the pointer (time display, tooltips).
pub type RefreshHook = Box<dyn FnMut(Seek)>;

/// Whether a notification requires recomputing the bar.
///
/// Every notification does; there is no debouncing.
pub fn triggers_refresh(notification: PlaybackNotification) -> bool {
    matches!(
        notification,
        PlaybackNotification::Ready
            | PlaybackNotification::TimeUpdate
            | PlaybackNotification::DurationChange
            | PlaybackNotification::Ended
    )
}
