//! seekbar - a scrubbable media progress control
//!
//! The [`control`] module holds the control itself: position mapping, the
//! scrub state machine, keyboard stepping, accessibility annotation and
//! tooltip bounds. [`playback`] defines the engine seam it talks to, [`dom`]
//! the element tree it writes into, and [`tui`] a terminal host.

pub mod config;
pub mod control;
pub mod dom;
pub mod format;
pub mod playback;
pub mod tui;

pub use config::Config;
