//! Scrub session state.

/// A drag in progress.
///
/// Created on pointer-down, dropped on pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrubSession {
    /// Playback was running when the drag began and must resume on release
    pub was_playing: bool,
}

/// State of the seek bar's pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrubState {
    #[default]
    Idle,
    Scrubbing(ScrubSession),
}

impl ScrubState {
    pub fn is_scrubbing(&self) -> bool {
        matches!(self, Self::Scrubbing(_))
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<ScrubSession> {
        match self {
            Self::Idle => None,
            Self::Scrubbing(session) => Some(*session),
        }
    }
}
