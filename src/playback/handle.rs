//! The playback handle contract.

use std::cell::RefCell;
use std::rc::Rc;

/// Playback engine as seen by the progress control.
///
/// The host player owns the engine. The control reads and mutates it only
/// through this trait, and is the only writer of the scrub flag.
pub trait PlaybackHandle {
    /// Live current time in seconds.
    fn current_time(&self) -> f64;

    /// Seek. Clamping to the media bounds is the engine's concern.
    fn set_current_time(&mut self, time: f64);

    /// Duration in seconds, `None` while not yet known.
    fn duration(&self) -> Option<f64>;

    fn paused(&self) -> bool;
    fn pause(&mut self);
    fn play(&mut self);

    /// Whether a scrub session is active.
    fn scrubbing(&self) -> bool;
    fn set_scrubbing(&mut self, scrubbing: bool);

    /// Last time snapshot taken by the engine.
    ///
    /// Engines that cannot keep up with rapid seeks report a stale live time
    /// during a drag; this snapshot follows the last requested seek instead.
    fn cached_current_time(&self) -> f64;
}

/// Shared, single-threaded handle to an engine.
pub type SharedHandle<P> = Rc<RefCell<P>>;

/// Notifications an engine emits towards its UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackNotification {
    /// Component finished mounting
    Ready,
    /// Current time changed (best effort, may be skipped under load)
    TimeUpdate,
    /// Duration became known or changed
    DurationChange,
    /// Playback reached the end
    Ended,
}
