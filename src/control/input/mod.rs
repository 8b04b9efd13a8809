//! Input handling for the seek bar.
//!
//! Pointer input drives the scrub state machine; keyboard input steps the
//! play head by a fixed amount.

mod keyboard;
mod pointer;

pub use keyboard::{direction_for_key, step, StepDirection, STEP_SECONDS};
pub use pointer::{seek_target, ScrubStateMachine, END_EPSILON};
