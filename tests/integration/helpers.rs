//! Shared fixtures for integration tests

use std::cell::RefCell;
use std::rc::Rc;

use seekbar::config::ProgressControlConfig;
use seekbar::control::{
    Bounds, InputSurface, ListenerKind, Pointer, ProgressControl, SurfaceError, TopLevelSurface,
};
use seekbar::dom::{Element, FixedMeasure};
use seekbar::playback::{MediaClock, PlaybackHandle};

/// Bar laid out from x=0 to x=100, so pointer x equals percent.
pub const BAR: Bounds = Bounds {
    x: 0.0,
    y: 0.0,
    width: 100.0,
    height: 1.0,
};

/// Pointer at `percent` of the bar.
pub fn at(percent: f64) -> Pointer {
    Pointer::new(percent, 0.0)
}

/// Surface that accepts registrations but refuses removals.
///
/// Stands in for a host that loses access to the top-level context mid-drag.
#[derive(Debug, Default)]
pub struct DetachFailingSurface {
    pub listening: Vec<ListenerKind>,
    pub attach_attempts: usize,
    pub detach_attempts: usize,
}

impl InputSurface for DetachFailingSurface {
    fn add_listener(&mut self, kind: ListenerKind) -> Result<(), SurfaceError> {
        self.attach_attempts += 1;
        self.listening.push(kind);
        Ok(())
    }

    fn remove_listener(&mut self, _kind: ListenerKind) -> Result<(), SurfaceError> {
        self.detach_attempts += 1;
        Err(SurfaceError::Unavailable("context torn down".to_string()))
    }
}

/// A control over a clock of `duration` seconds, optionally playing.
pub struct Harness<S: InputSurface + 'static> {
    pub control: ProgressControl<MediaClock>,
    pub clock: Rc<RefCell<MediaClock>>,
    pub surface: Rc<RefCell<S>>,
}

/// Measure with an 800 wide player, a 760 wide bar and a 60 wide tooltip label.
pub fn measure() -> FixedMeasure {
    FixedMeasure::new()
        .with("video-js", 800.0)
        .with("vjs-time-tooltip", 60.0)
        .with_bar_width(760.0)
}

pub fn harness_with<S: InputSurface + 'static>(
    surface: S,
    duration: Option<f64>,
    playing: bool,
    keep_tooltips_inside: bool,
) -> Harness<S> {
    let mut clock = MediaClock::new(duration);
    if playing {
        clock.play();
        clock.play_calls = 0;
    }
    let clock = Rc::new(RefCell::new(clock));
    let surface = Rc::new(RefCell::new(surface));

    let dyn_surface: Rc<RefCell<dyn InputSurface>> = surface.clone();
    let mut control = ProgressControl::new(
        Rc::clone(&clock),
        dyn_surface,
        Rc::new(measure()),
        Element::create("div", "video-js"),
        &ProgressControlConfig {
            keep_tooltips_inside,
        },
    );
    control.set_bounds(BAR);

    Harness {
        control,
        clock,
        surface,
    }
}

pub fn harness(duration: f64, playing: bool) -> Harness<TopLevelSurface> {
    harness_with(TopLevelSurface::new(), Some(duration), playing, false)
}

pub fn restricted_harness(duration: f64, playing: bool) -> Harness<TopLevelSurface> {
    harness_with(TopLevelSurface::restricted(), Some(duration), playing, false)
}
