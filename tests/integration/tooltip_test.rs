//! Integration tests for tooltip bounds and the rendered element tree

use std::cell::RefCell;
use std::rc::Rc;

use seekbar::config::ProgressControlConfig;
use seekbar::control::{
    class, InputSurface, Pointer, ProgressControl, TooltipGeometry, TopLevelSurface,
};
use seekbar::dom::{Element, Measure};
use seekbar::playback::{MediaClock, PlaybackHandle, PlaybackNotification};
use seekbar::tui::measure::{TerminalMeasure, PLAYER_CLASS};

use crate::helpers::{at, harness_with, measure, BAR};

/// Control over `clock` with bounded tooltips, measured by `measure`.
fn bounded_control(
    clock: MediaClock,
    measure: Rc<dyn Measure>,
    player_class: &str,
) -> (ProgressControl<MediaClock>, Rc<RefCell<MediaClock>>) {
    let clock = Rc::new(RefCell::new(clock));
    let surface: Rc<RefCell<dyn InputSurface>> = Rc::new(RefCell::new(TopLevelSurface::new()));
    let mut control = ProgressControl::new(
        Rc::clone(&clock),
        surface,
        measure,
        Element::create("div", player_class),
        &ProgressControlConfig {
            keep_tooltips_inside: true,
        },
    );
    control.set_bounds(BAR);
    (control, clock)
}

fn track_style(control: &ProgressControl<MediaClock>, name: &str) -> Option<String> {
    control
        .seek_bar()
        .tooltip_track()
        .borrow()
        .style(name)
        .map(str::to_string)
}

#[test]
fn geometry_matches_player_and_label_width() {
    let g = TooltipGeometry::compute(800.0, 60.0);
    assert_eq!(g.max_width, 770.0);
    assert_eq!(g.min_width, 30.0);
    assert_eq!(g.right_offset, -30.0);
}

#[test]
fn tooltip_track_is_bounded_when_enabled() {
    let h = harness_with(TopLevelSurface::new(), Some(60.0), false, true);
    assert!(h.control.seek_bar().keeps_tooltips_inside());

    let track = h.control.seek_bar().tooltip_track().borrow().clone();
    assert_eq!(track.style("max-width"), Some("770px"));
    assert_eq!(track.style("min-width"), Some("30px"));
    assert_eq!(track.style("right"), Some("-30px"));
}

#[test]
fn tooltip_track_is_untouched_when_disabled() {
    let h = harness_with(TopLevelSurface::new(), Some(60.0), false, false);
    assert!(!h.control.seek_bar().keeps_tooltips_inside());

    let track = h.control.seek_bar().tooltip_track().borrow().clone();
    assert_eq!(track.style("max-width"), None);
    assert_eq!(track.style("right"), None);
}

#[test]
fn tooltip_label_follows_the_drag() {
    let mut h = harness_with(TopLevelSurface::new(), Some(600.0), true, true);

    h.control.handle_pointer_down(at(10.0));
    h.control.handle_surface_move(Pointer::new(75.0, 12.0));

    let label = h.control.seek_bar().tooltip_label().borrow().text.clone();
    assert_eq!(label, "07:30");
    assert_eq!(h.control.time_display().borrow().text, "07:30");
    assert_eq!(h.clock.borrow().current_time(), 450.0);
}

#[test]
fn control_tree_after_mount() {
    let mut h = harness_with(TopLevelSurface::new(), Some(60.0), false, true);
    h.clock.borrow_mut().set_current_time(15.0);
    h.control.update_progress();

    assert!(Element::query(h.control.el(), class::HOLDER).is_some());
    insta::assert_snapshot!(Element::outline(h.control.el()).trim_end(), @r#"
    <div class="vjs-progress-control vjs-control">
      <div class="vjs-progress-holder vjs-slider vjs-slider-horizontal" aria-label="progress bar" aria-valuemax="100" aria-valuemin="0" aria-valuenow="25.00" aria-valuetext="0:15 of 1:00" role="slider" tabindex="0">
        <div class="vjs-load-progress">
        <div class="vjs-tooltip-progress-bar vjs-slider-bar" data-current-time="0:15" style="max-width: 770px; min-width: 30px; right: -30px; width: 190px">
          <div class="vjs-time-tooltip">0:15
        <div class="vjs-play-progress vjs-slider-bar" data-current-time="0:15" style="width: 25.00%">
    "#);
}

#[test]
fn tooltip_track_mirrors_play_progress_width() {
    let (mut control, clock) =
        bounded_control(MediaClock::new(Some(60.0)), Rc::new(measure()), "video-js");
    assert_eq!(track_style(&control, "width").as_deref(), Some("0px"));

    clock.borrow_mut().set_current_time(30.0);
    control.on_notification(PlaybackNotification::TimeUpdate);
    assert_eq!(track_style(&control, "width").as_deref(), Some("380px"));

    control.handle_pointer_down(at(75.0));
    assert_eq!(track_style(&control, "width").as_deref(), Some("570px"));
    control.handle_surface_up();
}

#[test]
fn tooltip_bounds_follow_label_width_between_refreshes() {
    let (mut control, clock) = bounded_control(
        MediaClock::new(Some(599.0)),
        Rc::new(TerminalMeasure::new(80, 76)),
        PLAYER_CLASS,
    );

    clock.borrow_mut().set_current_time(599.0);
    control.on_notification(PlaybackNotification::TimeUpdate);
    assert_eq!(control.seek_bar().tooltip_label().borrow().text, "9:59");
    assert_eq!(track_style(&control, "min-width").as_deref(), Some("3px"));
    assert_eq!(track_style(&control, "right").as_deref(), Some("-3px"));
    assert_eq!(track_style(&control, "max-width").as_deref(), Some("77px"));

    let notification = clock.borrow_mut().set_duration(Some(1200.0));
    clock.borrow_mut().set_current_time(600.0);
    control.on_notification(notification);
    assert_eq!(control.seek_bar().tooltip_label().borrow().text, "10:00");
    assert_eq!(track_style(&control, "min-width").as_deref(), Some("4px"));
    assert_eq!(track_style(&control, "right").as_deref(), Some("-3.5px"));
    assert_eq!(track_style(&control, "max-width").as_deref(), Some("76px"));
}

// ============================================================================
// Custom time format
// ============================================================================

fn seconds(time: f64, _guide: f64) -> String {
    format!("{:.1}s", time)
}

#[test]
fn custom_formatter_reaches_every_label() {
    let clock = Rc::new(RefCell::new(MediaClock::new(Some(60.0))));
    let surface: Rc<RefCell<dyn InputSurface>> = Rc::new(RefCell::new(TopLevelSurface::new()));
    let mut control = ProgressControl::with_formatter(
        Rc::clone(&clock),
        surface,
        Rc::new(measure()),
        Element::create("div", "video-js"),
        &ProgressControlConfig {
            keep_tooltips_inside: true,
        },
        seconds,
    );
    control.set_bounds(BAR);
    assert_eq!(control.time_display().borrow().text, "0.0s");

    control.handle_pointer_down(at(10.0));
    control.handle_surface_move(Pointer::new(50.0, 0.0));
    assert_eq!(control.time_display().borrow().text, "30.0s");
    assert_eq!(control.seek_bar().tooltip_label().borrow().text, "30.0s");
    control.handle_surface_up();

    let holder = Rc::clone(control.seek_bar().el());
    assert_eq!(holder.borrow().attr("aria-valuetext"), Some("30.0s of 60.0s"));
    assert_eq!(
        control.seek_bar().play_progress().borrow().attr("data-current-time"),
        Some("30.0s")
    );

    clock.borrow_mut().set_current_time(45.0);
    control.on_notification(PlaybackNotification::TimeUpdate);
    assert_eq!(control.time_display().borrow().text, "45.0s");
    assert_eq!(control.seek_bar().tooltip_label().borrow().text, "45.0s");
    assert_eq!(holder.borrow().attr("aria-valuetext"), Some("45.0s of 60.0s"));
}
