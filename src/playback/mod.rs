//! Playback engine seam.
//!
//! - `handle`: the `PlaybackHandle` trait the control drives, and the
//!   notifications an engine emits
//! - `clock`: `MediaClock`, a simulated engine used by the terminal host and tests

mod clock;
mod handle;

pub use clock::MediaClock;
pub use handle::{PlaybackHandle, PlaybackNotification, SharedHandle};
