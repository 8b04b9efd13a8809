//! Seek control for a media progress bar.
//!
//! # Architecture
//!
//! - `position`: pointer and playback time to bar fraction
//! - `a11y`: accessibility attributes, using the cached time while scrubbing
//! - `tooltip`: keeps the time tooltip inside the player
//! - `input/`: scrub state machine (pointer) and fixed-step seeking (keyboard)
//! - `surface`: the top-level input surface drag listeners live on
//! - `slider`: generic slider behaviour the seek bar delegates to
//! - `seek_bar`: the slider with scrub semantics
//! - `refresh`: notification-driven and seek-driven refresh
//! - `progress_control`: container wiring the seek bar to the time display
//!
//! # Usage
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use seekbar::config::ProgressControlConfig;
//! use seekbar::control::{Bounds, InputSurface, Pointer, ProgressControl, TopLevelSurface};
//! use seekbar::dom::{Element, FixedMeasure};
//! use seekbar::playback::{MediaClock, PlaybackHandle};
//!
//! let clock = Rc::new(RefCell::new(MediaClock::new(Some(60.0))));
//! let surface: Rc<RefCell<dyn InputSurface>> = Rc::new(RefCell::new(TopLevelSurface::new()));
//! let mut control = ProgressControl::new(
//!     clock.clone(),
//!     surface,
//!     Rc::new(FixedMeasure::new()),
//!     Element::create("div", "video-js"),
//!     &ProgressControlConfig::default(),
//! );
//! control.set_bounds(Bounds::new(0.0, 0.0, 60.0, 1.0));
//!
//! control.handle_pointer_down(Pointer::new(30.0, 0.0));
//! control.handle_surface_up();
//! assert_eq!(clock.borrow().current_time(), 30.0);
//! ```

pub mod a11y;
mod error;
pub mod input;
pub mod position;
mod progress_control;
pub mod refresh;
mod seek_bar;
pub mod slider;
pub mod state;
mod surface;
pub mod tooltip;

pub use a11y::AccessibilityDescriptor;
pub use error::SurfaceError;
pub use input::{ScrubStateMachine, END_EPSILON, STEP_SECONDS};
pub use position::{Bounds, NormalizedPosition, Orientation, Pointer};
pub use progress_control::{ProgressControl, CONTROL_CLASS, TIME_DISPLAY_CLASS};
pub use refresh::{RefreshHook, Seek};
pub use seek_bar::{class, SeekBar, ARIA_LABEL};
pub use state::{ScrubSession, ScrubState};
pub use surface::{InputSurface, ListenerKind, TopLevelSurface};
pub use tooltip::{TooltipCoordinator, TooltipGeometry};
