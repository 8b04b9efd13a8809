//! The seek bar: a slider that scrubs a playback handle.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::KeyCode;
use tracing::trace;

use crate::config::ProgressControlConfig;
use crate::dom::{Element, Measure, NodeRef};
use crate::format::{format_time, TimeFormatter};
use crate::playback::{PlaybackHandle, PlaybackNotification, SharedHandle};

use super::a11y::{self, AccessibilityDescriptor};
use super::input::{direction_for_key, step, ScrubStateMachine, StepDirection};
use super::position::{Bounds, Orientation, Pointer};
use super::refresh::{triggers_refresh, RefreshHook, Seek};
use super::slider::Slider;
use super::state::ScrubState;
use super::surface::InputSurface;
use super::tooltip::TooltipCoordinator;

/// Class names of the seek bar and its default children.
pub mod class {
    pub const HOLDER: &str = "vjs-progress-holder";
    pub const LOAD_PROGRESS: &str = "vjs-load-progress";
    pub const PLAY_PROGRESS: &str = "vjs-play-progress";
    pub const TOOLTIP_TRACK: &str = "vjs-tooltip-progress-bar";
    pub const TIME_TOOLTIP: &str = "vjs-time-tooltip";
}

/// Accessible name of the holder.
pub const ARIA_LABEL: &str = "progress bar";

/// Seek bar bound to one playback handle.
pub struct SeekBar<P: PlaybackHandle> {
    handle: SharedHandle<P>,
    surface: Rc<RefCell<dyn InputSurface>>,
    measure: Rc<dyn Measure>,
    slider: Slider,
    machine: ScrubStateMachine,
    format: TimeFormatter,
    tooltip_track: NodeRef,
    tooltip_label: NodeRef,
    tooltip: Option<TooltipCoordinator>,
    hooks: Vec<RefreshHook>,
}

impl<P: PlaybackHandle> SeekBar<P> {
    /// Build the seek bar and its default children.
    ///
    /// # Arguments
    /// * `handle` - Engine to scrub
    /// * `surface` - Top-level surface for drag listeners
    /// * `measure` - Width queries for tooltip coordination
    /// * `player` - Outermost player element, the tooltip's bounding box
    /// * `config` - Progress control options
    pub fn new(
        handle: SharedHandle<P>,
        surface: Rc<RefCell<dyn InputSurface>>,
        measure: Rc<dyn Measure>,
        player: NodeRef,
        config: &ProgressControlConfig,
    ) -> Self {
        let load_progress = Element::create("div", class::LOAD_PROGRESS);
        let play_progress =
            Element::create("div", &format!("{} vjs-slider-bar", class::PLAY_PROGRESS));
        let tooltip_track =
            Element::create("div", &format!("{} vjs-slider-bar", class::TOOLTIP_TRACK));
        let tooltip_label = Element::create("div", class::TIME_TOOLTIP);
        tooltip_track.borrow_mut().append(Rc::clone(&tooltip_label));

        let slider = Slider::new(
            class::HOLDER,
            Rc::clone(&play_progress),
            Orientation::Horizontal,
        );
        {
            let mut el = slider.el().borrow_mut();
            el.set_attr("aria-label", ARIA_LABEL);
            el.append(load_progress);
            el.append(Rc::clone(&tooltip_track));
            el.append(Rc::clone(&play_progress));
        }

        let tooltip = config.keep_tooltips_inside.then(|| TooltipCoordinator {
            player,
            play_progress,
            track: Rc::clone(&tooltip_track),
            label: Rc::clone(&tooltip_label),
        });

        Self {
            handle,
            surface,
            measure,
            slider,
            machine: ScrubStateMachine::new(),
            format: format_time,
            tooltip_track,
            tooltip_label,
            tooltip,
            hooks: Vec::new(),
        }
    }

    /// Replace the time formatter.
    pub fn with_formatter(mut self, format: TimeFormatter) -> Self {
        self.format = format;
        self
    }

    /// The holder element.
    pub fn el(&self) -> &NodeRef {
        self.slider.el()
    }

    /// The play-progress fill element.
    pub fn play_progress(&self) -> &NodeRef {
        self.slider.bar()
    }

    pub fn tooltip_track(&self) -> &NodeRef {
        &self.tooltip_track
    }

    pub fn tooltip_label(&self) -> &NodeRef {
        &self.tooltip_label
    }

    pub fn formatter(&self) -> TimeFormatter {
        self.format
    }

    pub fn keeps_tooltips_inside(&self) -> bool {
        self.tooltip.is_some()
    }

    pub fn state(&self) -> ScrubState {
        self.machine.state()
    }

    pub fn bounds(&self) -> Bounds {
        self.slider.bounds()
    }

    /// Record where the host laid the bar out.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.slider.set_bounds(bounds);
    }

    /// Register a callback run after every scrub seek.
    pub fn add_refresh_hook(&mut self, hook: RefreshHook) {
        self.hooks.push(hook);
    }

    /// Pointer pressed on the bar.
    pub fn handle_pointer_down(&mut self, pointer: Pointer) {
        self.slider.handle_mouse_down();
        {
            let mut handle = self.handle.borrow_mut();
            let mut surface = self.surface.borrow_mut();
            self.machine.begin(&mut *handle, &mut *surface);
        }
        self.handle_pointer_move(pointer);
    }

    /// Pointer moved, on the bar or anywhere on the top-level surface.
    pub fn handle_pointer_move(&mut self, pointer: Pointer) {
        let fraction = self.slider.calculate_distance(pointer);
        let duration = self.handle.borrow().duration();
        let Some(time) = self.machine.target_for_move(fraction, duration) else {
            return;
        };

        self.handle.borrow_mut().set_current_time(time);

        let seek = Seek {
            time,
            duration: duration.unwrap_or(0.0),
        };
        for hook in self.hooks.iter_mut() {
            hook(seek);
        }
        self.update_progress();
    }

    /// Pointer released, on the bar or anywhere on the top-level surface.
    pub fn handle_pointer_up(&mut self) {
        if !self.machine.is_scrubbing() {
            return;
        }
        self.slider.handle_mouse_up();
        {
            let mut handle = self.handle.borrow_mut();
            let mut surface = self.surface.borrow_mut();
            self.machine.end(&mut *handle, &mut *surface);
        }
        self.update_progress();
    }

    /// Handle a key press while the bar has focus.
    ///
    /// Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match direction_for_key(code) {
            Some(StepDirection::Forward) => {
                self.step_forward();
                true
            }
            Some(StepDirection::Back) => {
                self.step_back();
                true
            }
            None => false,
        }
    }

    pub fn step_forward(&mut self) {
        step(&mut *self.handle.borrow_mut(), StepDirection::Forward);
        self.update_progress();
    }

    pub fn step_back(&mut self) {
        step(&mut *self.handle.borrow_mut(), StepDirection::Back);
        self.update_progress();
    }

    /// React to an engine notification.
    pub fn on_notification(&mut self, notification: PlaybackNotification) {
        if triggers_refresh(notification) {
            trace!(?notification, "progress refresh");
            self.update_progress();
        }
    }

    /// Recompute the fill, accessibility attributes and tooltip.
    pub fn update_progress(&mut self) -> AccessibilityDescriptor {
        let handle = self.handle.borrow();
        let time = a11y::effective_time(&*handle);
        let duration = handle.duration().unwrap_or(0.0);
        let label = (self.format)(time, duration);

        self.slider.update(a11y::effective_fraction(&*handle));
        let descriptor = a11y::annotate(self.slider.el(), &*handle, self.format);

        self.tooltip_label.borrow_mut().set_text(label.clone());
        self.tooltip_track
            .borrow_mut()
            .set_attr("data-current-time", label);

        if let Some(tooltip) = &self.tooltip {
            tooltip.refresh(self.measure.as_ref());
        }

        descriptor
    }
}
