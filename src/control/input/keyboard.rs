//! Keyboard stepping for the seek bar.

use crossterm::event::KeyCode;

use crate::playback::PlaybackHandle;

/// Seconds moved per key press.
pub const STEP_SECONDS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Forward,
    Back,
}

/// Map a key to a step, as sliders do: right/up forward, left/down back.
pub fn direction_for_key(code: KeyCode) -> Option<StepDirection> {
    match code {
        KeyCode::Right | KeyCode::Up => Some(StepDirection::Forward),
        KeyCode::Left | KeyCode::Down => Some(StepDirection::Back),
        _ => None,
    }
}

/// Move the play head one step. Bounds are left to the engine.
pub fn step<P: PlaybackHandle + ?Sized>(handle: &mut P, direction: StepDirection) {
    let now = handle.current_time();
    let target = match direction {
        StepDirection::Forward => now + STEP_SECONDS,
        StepDirection::Back => now - STEP_SECONDS,
    };
    handle.set_current_time(target);
}
