//! Pointer-driven scrub lifecycle.
//!
//! Pointer-down pauses playback and raises the engine's scrub flag,
//! pointer-moves seek, pointer-up restores what was there before. Move and up
//! listeners are registered on the top-level surface for the duration of the
//! drag so the pointer can leave the bar without the drag getting lost.

use tracing::{debug, trace};

use crate::control::position::NormalizedPosition;
use crate::control::state::{ScrubSession, ScrubState};
use crate::control::surface::{InputSurface, ListenerKind};
use crate::playback::PlaybackHandle;

/// Distance kept from the end of the media while dragging.
///
/// Seeking exactly to the duration makes engines report the media as ended
/// in the middle of a drag.
pub const END_EPSILON: f64 = 0.1;

/// Seek target for a bar fraction.
///
/// Returns `None` when the duration is not usable, in which case no seek
/// should be issued.
pub fn seek_target(fraction: NormalizedPosition, duration: Option<f64>) -> Option<f64> {
    let duration = duration.filter(|d| d.is_finite() && *d > 0.0)?;
    let target = fraction.value() * duration;
    if target == duration {
        Some((duration - END_EPSILON).max(0.0))
    } else {
        Some(target)
    }
}

/// `Idle -> Scrubbing -> Idle`, one session at a time.
#[derive(Debug, Default)]
pub struct ScrubStateMachine {
    state: ScrubState,
}

impl ScrubStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ScrubState {
        self.state
    }

    pub fn is_scrubbing(&self) -> bool {
        self.state.is_scrubbing()
    }

    /// Enter `Scrubbing`.
    ///
    /// Returns `false` without touching the engine or the surface when a
    /// session is already active.
    pub fn begin<P: PlaybackHandle + ?Sized>(
        &mut self,
        handle: &mut P,
        surface: &mut dyn InputSurface,
    ) -> bool {
        if self.state.is_scrubbing() {
            debug!("pointer-down during an active scrub, keeping the current session");
            return false;
        }

        let was_playing = !handle.paused();
        if was_playing {
            handle.pause();
        }
        handle.set_scrubbing(true);

        for kind in ListenerKind::ALL {
            if let Err(e) = surface.add_listener(kind) {
                debug!("{}; drag will only track the local element", e);
            }
        }

        self.state = ScrubState::Scrubbing(ScrubSession { was_playing });
        debug!(was_playing, "scrub started");
        true
    }

    /// Seek target for a pointer move, if a session is active.
    pub fn target_for_move(
        &self,
        fraction: NormalizedPosition,
        duration: Option<f64>,
    ) -> Option<f64> {
        if !self.state.is_scrubbing() {
            return None;
        }
        let target = seek_target(fraction, duration);
        match target {
            Some(t) => trace!(fraction = fraction.value(), target = t, "scrub seek"),
            None => debug!("duration unknown, scrub move ignored"),
        }
        target
    }

    /// Leave `Scrubbing`, returning the finished session.
    ///
    /// Detaching is attempted for every listener even if attaching failed.
    pub fn end<P: PlaybackHandle + ?Sized>(
        &mut self,
        handle: &mut P,
        surface: &mut dyn InputSurface,
    ) -> Option<ScrubSession> {
        let ScrubState::Scrubbing(session) = self.state else {
            return None;
        };

        for kind in ListenerKind::ALL {
            if let Err(e) = surface.remove_listener(kind) {
                debug!("{}; nothing to detach", e);
            }
        }

        handle.set_scrubbing(false);
        if session.was_playing {
            handle.play();
        }

        self.state = ScrubState::Idle;
        debug!(resumed = session.was_playing, "scrub finished");
        Some(session)
    }
}
