//! Progress control: the seek bar plus the widgets that follow it.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::KeyCode;

use crate::config::ProgressControlConfig;
use crate::dom::{Element, Measure, NodeRef};
use crate::format::{format_time, TimeFormatter};
use crate::playback::{PlaybackHandle, PlaybackNotification, SharedHandle};

use super::a11y;
use super::position::{Bounds, Pointer};
use super::seek_bar::SeekBar;
use super::state::ScrubState;
use super::surface::InputSurface;

pub const CONTROL_CLASS: &str = "vjs-progress-control vjs-control";
pub const TIME_DISPLAY_CLASS: &str = "vjs-current-time-display";

/// Container for the seek bar, wired to a current-time display.
///
/// The time display sits outside the bar (hosts usually put it in the control
/// bar next to the duration); the container keeps it in step with scrubbing
/// through a seek bar refresh hook.
pub struct ProgressControl<P: PlaybackHandle> {
    el: NodeRef,
    handle: SharedHandle<P>,
    seek_bar: SeekBar<P>,
    time_display: NodeRef,
}

impl<P: PlaybackHandle> ProgressControl<P> {
    /// Build and mount the control with the default time format.
    ///
    /// Mounting counts as the component-ready notification, so the returned
    /// control already reflects the handle's state.
    pub fn new(
        handle: SharedHandle<P>,
        surface: Rc<RefCell<dyn InputSurface>>,
        measure: Rc<dyn Measure>,
        player: NodeRef,
        config: &ProgressControlConfig,
    ) -> Self {
        Self::with_formatter(handle, surface, measure, player, config, format_time)
    }

    /// Build and mount the control, rendering times with `format`.
    ///
    /// The formatter feeds the accessibility text, the tooltip label and the
    /// time display.
    pub fn with_formatter(
        handle: SharedHandle<P>,
        surface: Rc<RefCell<dyn InputSurface>>,
        measure: Rc<dyn Measure>,
        player: NodeRef,
        config: &ProgressControlConfig,
        format: TimeFormatter,
    ) -> Self {
        let mut seek_bar = SeekBar::new(Rc::clone(&handle), surface, measure, player, config)
            .with_formatter(format);
        let el = Element::create("div", CONTROL_CLASS);
        el.borrow_mut().append(Rc::clone(seek_bar.el()));

        let time_display = Element::create("div", TIME_DISPLAY_CLASS);
        time_display.borrow_mut().set_attr("aria-live", "off");

        let display = Rc::clone(&time_display);
        let play_progress = Rc::clone(seek_bar.play_progress());
        seek_bar.add_refresh_hook(Box::new(move |seek| {
            let label = format(seek.time, seek.duration);
            play_progress
                .borrow_mut()
                .set_attr("data-current-time", label.clone());
            display.borrow_mut().set_text(label);
        }));

        let mut control = Self {
            el,
            handle,
            seek_bar,
            time_display,
        };
        control.on_notification(PlaybackNotification::Ready);
        control
    }

    pub fn el(&self) -> &NodeRef {
        &self.el
    }

    pub fn seek_bar(&self) -> &SeekBar<P> {
        &self.seek_bar
    }

    pub fn seek_bar_mut(&mut self) -> &mut SeekBar<P> {
        &mut self.seek_bar
    }

    pub fn time_display(&self) -> &NodeRef {
        &self.time_display
    }

    pub fn state(&self) -> ScrubState {
        self.seek_bar.state()
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.seek_bar.set_bounds(bounds);
    }

    /// Pointer pressed on the bar.
    pub fn handle_pointer_down(&mut self, pointer: Pointer) {
        self.seek_bar.handle_pointer_down(pointer);
    }

    /// Pointer moved over the bar's own element.
    pub fn handle_pointer_move(&mut self, pointer: Pointer) {
        self.seek_bar.handle_pointer_move(pointer);
    }

    /// Pointer released over the bar's own element.
    pub fn handle_pointer_up(&mut self) {
        self.seek_bar.handle_pointer_up();
    }

    /// Pointer moved anywhere, delivered by the top-level surface.
    pub fn handle_surface_move(&mut self, pointer: Pointer) {
        self.seek_bar.handle_pointer_move(pointer);
    }

    /// Pointer released anywhere, delivered by the top-level surface.
    pub fn handle_surface_up(&mut self) {
        self.seek_bar.handle_pointer_up();
    }

    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let consumed = self.seek_bar.handle_key(code);
        if consumed {
            self.update_time_display();
        }
        consumed
    }

    pub fn step_forward(&mut self) {
        self.seek_bar.step_forward();
        self.update_time_display();
    }

    pub fn step_back(&mut self) {
        self.seek_bar.step_back();
        self.update_time_display();
    }

    /// Recompute the seek bar and the time display.
    pub fn update_progress(&mut self) {
        self.seek_bar.update_progress();
        self.update_time_display();
    }

    /// Forward an engine notification.
    pub fn on_notification(&mut self, notification: PlaybackNotification) {
        self.seek_bar.on_notification(notification);
        self.update_time_display();
    }

    fn update_time_display(&self) {
        let handle = self.handle.borrow();
        let time = a11y::effective_time(&*handle);
        let duration = handle.duration().unwrap_or(0.0);
        let label = (self.seek_bar.formatter())(time, duration);
        self.seek_bar
            .play_progress()
            .borrow_mut()
            .set_attr("data-current-time", label.clone());
        self.time_display.borrow_mut().set_text(label);
    }
}
