//! Integration tests for scrubbing, stepping and progress refresh

use crossterm::event::KeyCode;

use seekbar::control::a11y::describe;
use seekbar::control::position::{fraction_from_playback, fraction_from_pointer};
use seekbar::control::{
    Orientation, Pointer, ScrubState, ScrubStateMachine, TopLevelSurface, END_EPSILON,
};
use seekbar::format::format_time;
use seekbar::playback::{PlaybackHandle, PlaybackNotification};

use crate::helpers::{at, harness, harness_with, restricted_harness, DetachFailingSurface, BAR};

/// Handle with free-form state that counts every mutation.
#[derive(Debug, Default)]
struct StubHandle {
    time: f64,
    duration: Option<f64>,
    paused: bool,
    scrubbing: bool,
    flag_sets: usize,
    pause_calls: usize,
    play_calls: usize,
}

impl PlaybackHandle for StubHandle {
    fn current_time(&self) -> f64 {
        self.time
    }

    fn set_current_time(&mut self, time: f64) {
        self.time = time;
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn pause(&mut self) {
        self.pause_calls += 1;
        self.paused = true;
    }

    fn play(&mut self) {
        self.play_calls += 1;
        self.paused = false;
    }

    fn scrubbing(&self) -> bool {
        self.scrubbing
    }

    fn set_scrubbing(&mut self, scrubbing: bool) {
        if scrubbing {
            self.flag_sets += 1;
        }
        self.scrubbing = scrubbing;
    }

    fn cached_current_time(&self) -> f64 {
        self.time
    }
}

// ============================================================================
// Position mapping
// ============================================================================

#[test]
fn playback_fraction_is_time_over_duration() {
    for duration in [0.5, 1.0, 60.0, 7200.0] {
        for step in 0..=10 {
            let time = duration * step as f64 / 10.0;
            let fraction = fraction_from_playback(time, Some(duration)).value();
            assert!(
                (fraction - time / duration).abs() < 1e-12,
                "t={} d={} gave {}",
                time,
                duration,
                fraction
            );
        }
        assert_eq!(fraction_from_playback(duration + 3.0, Some(duration)).value(), 1.0);
    }
}

#[test]
fn pointer_fraction_is_clamped() {
    for x in [-500.0, -0.1, 0.0, 37.5, 99.9, 100.0, 100.1, 1e6] {
        let fraction = fraction_from_pointer(Pointer::new(x, 0.0), BAR, Orientation::Horizontal);
        assert!((0.0..=1.0).contains(&fraction.value()), "x={} gave {}", x, fraction);
    }
    assert_eq!(
        fraction_from_pointer(Pointer::new(-20.0, 0.0), BAR, Orientation::Horizontal).value(),
        0.0
    );
    assert_eq!(
        fraction_from_pointer(Pointer::new(140.0, 0.0), BAR, Orientation::Horizontal).value(),
        1.0
    );
}

// ============================================================================
// Scrub sessions
// ============================================================================

#[test]
fn scrub_while_playing_pauses_and_resumes_once() {
    let mut handle = StubHandle {
        duration: Some(60.0),
        ..Default::default()
    };
    let mut surface = TopLevelSurface::new();
    let mut machine = ScrubStateMachine::new();

    assert!(machine.begin(&mut handle, &mut surface));
    assert_eq!(handle.pause_calls, 1);
    assert_eq!(handle.flag_sets, 1);
    assert!(handle.scrubbing);

    let session = machine.end(&mut handle, &mut surface).expect("session was active");
    assert!(session.was_playing);
    assert_eq!(handle.play_calls, 1);
    assert_eq!(handle.pause_calls, 1);
    assert_eq!(handle.flag_sets, 1);
    assert!(!handle.scrubbing);
}

#[test]
fn scrub_while_paused_stays_paused() {
    let mut h = harness(60.0, false);

    h.control.handle_pointer_down(at(25.0));
    h.control.handle_pointer_move(at(75.0));
    h.control.handle_pointer_up();

    let clock = h.clock.borrow();
    assert!(clock.paused());
    assert_eq!(clock.play_calls, 0);
    assert_eq!(clock.pause_calls, 0);
    assert_eq!(clock.current_time(), 45.0);
}

#[test]
fn full_drag_seeks_and_restores_playback() {
    let mut h = harness(60.0, true);

    h.control.handle_pointer_down(at(10.0));
    assert!(h.control.state().is_scrubbing());
    assert!(h.clock.borrow().scrubbing());
    assert!(h.clock.borrow().paused());

    // Pointer leaves the bar; the surface keeps delivering moves
    h.control.handle_surface_move(Pointer::new(50.0, 40.0));
    h.control.handle_surface_up();

    let clock = h.clock.borrow();
    assert_eq!(clock.seeks, vec![6.0, 30.0]);
    assert!(!clock.scrubbing());
    assert!(!clock.paused());
    assert_eq!(clock.pause_calls, 1);
    assert_eq!(clock.play_calls, 1);
    assert_eq!(h.control.state(), ScrubState::Idle);
}

#[test]
fn seek_to_the_very_end_stops_short() {
    let mut h = harness(60.0, true);

    h.control.handle_pointer_down(at(100.0));
    h.control.handle_surface_move(Pointer::new(400.0, 0.0));
    h.control.handle_pointer_up();

    let clock = h.clock.borrow();
    assert_eq!(clock.seeks, vec![60.0 - END_EPSILON, 60.0 - END_EPSILON]);
    assert!(!clock.ended());
}

#[test]
fn unknown_duration_scrubs_without_seeking() {
    let mut h = harness_with(TopLevelSurface::new(), None, true, false);

    h.control.handle_pointer_down(at(40.0));
    h.control.handle_pointer_move(at(60.0));
    assert!(h.clock.borrow().seeks.is_empty());
    assert_eq!(
        h.control.seek_bar().el().borrow().attr("aria-valuenow"),
        Some("0.00")
    );

    h.control.handle_pointer_up();
    assert!(!h.clock.borrow().paused());
}

#[test]
fn moves_and_releases_without_a_session_are_ignored() {
    let mut h = harness(60.0, true);

    h.control.handle_pointer_move(at(50.0));
    h.control.handle_pointer_up();

    let clock = h.clock.borrow();
    assert!(clock.seeks.is_empty());
    assert_eq!(clock.pause_calls, 0);
    assert_eq!(clock.play_calls, 0);
    assert_eq!(h.surface.borrow().detach_attempts, 0);
}

#[test]
fn second_pointer_down_keeps_one_session() {
    let mut h = harness(60.0, true);

    h.control.handle_pointer_down(at(20.0));
    h.control.handle_pointer_down(at(40.0));
    {
        let clock = h.clock.borrow();
        assert_eq!(clock.pause_calls, 1);
        assert_eq!(clock.seeks, vec![12.0, 24.0]);
        assert_eq!(h.surface.borrow().attach_attempts, 2);
    }

    h.control.handle_pointer_up();
    let surface = h.surface.borrow();
    assert_eq!(surface.attach_attempts, surface.detach_attempts);
    assert_eq!(surface.active_listeners(), 0);
    assert_eq!(h.clock.borrow().play_calls, 1);
}

// ============================================================================
// Listener pairing
// ============================================================================

#[test]
fn listeners_are_paired_on_an_open_surface() {
    let mut h = harness(60.0, true);

    h.control.handle_pointer_down(at(30.0));
    assert_eq!(h.surface.borrow().active_listeners(), 2);
    h.control.handle_pointer_up();

    let surface = h.surface.borrow();
    assert_eq!(surface.attach_attempts, 2);
    assert_eq!(surface.detach_attempts, 2);
    assert_eq!(surface.active_listeners(), 0);
}

#[test]
fn restricted_surface_still_scrubs_and_pairs() {
    let mut h = restricted_harness(60.0, true);

    h.control.handle_pointer_down(at(30.0));
    h.control.handle_pointer_move(at(60.0));
    h.control.handle_pointer_up();

    let surface = h.surface.borrow();
    assert_eq!(surface.attach_attempts, surface.detach_attempts);
    assert_eq!(surface.active_listeners(), 0);

    let clock = h.clock.borrow();
    assert_eq!(clock.current_time(), 36.0);
    assert!(!clock.paused());
    assert!(!clock.scrubbing());
}

#[test]
fn failing_detach_does_not_wedge_the_control() {
    let mut h = harness_with(DetachFailingSurface::default(), Some(60.0), true, false);

    for _ in 0..2 {
        h.control.handle_pointer_down(at(50.0));
        h.control.handle_pointer_up();
        assert_eq!(h.control.state(), ScrubState::Idle);
        assert!(!h.clock.borrow().paused());
    }

    let surface = h.surface.borrow();
    assert_eq!(surface.attach_attempts, 4);
    assert_eq!(surface.detach_attempts, 4);
}

// ============================================================================
// Keyboard stepping
// ============================================================================

#[test]
fn step_forward_then_back_returns_to_start() {
    let mut h = harness(60.0, false);
    h.clock.borrow_mut().set_current_time(17.5);

    h.control.step_forward();
    assert_eq!(h.clock.borrow().current_time(), 22.5);
    h.control.step_back();
    assert_eq!(h.clock.borrow().current_time(), 17.5);
}

#[test]
fn arrow_keys_step_and_refresh_the_display() {
    let mut h = harness(60.0, false);

    assert!(h.control.handle_key(KeyCode::Right));
    assert!(h.control.handle_key(KeyCode::Up));
    assert_eq!(h.control.time_display().borrow().text, "0:10");

    assert!(h.control.handle_key(KeyCode::Down));
    assert_eq!(h.clock.borrow().current_time(), 5.0);
    assert!(!h.control.handle_key(KeyCode::Char('x')));
}

#[test]
fn stepping_clamps_at_the_edges() {
    let mut h = harness(60.0, false);

    h.control.step_back();
    assert_eq!(h.clock.borrow().current_time(), 0.0);

    h.clock.borrow_mut().set_current_time(58.0);
    h.control.step_forward();
    assert_eq!(h.clock.borrow().current_time(), 60.0);
}

// ============================================================================
// Accessibility and refresh
// ============================================================================

#[test]
fn aria_value_is_percent_to_two_decimals_capped_at_100() {
    let cases = [(0.0, "0.00"), (20.0, "33.33"), (40.0, "66.67"), (60.0, "100.00")];
    for (time, expected) in cases {
        let handle = StubHandle {
            time,
            duration: Some(60.0),
            ..Default::default()
        };
        assert_eq!(describe(&handle, format_time).value_now, expected);
    }

    let overrun = StubHandle {
        time: 75.0,
        duration: Some(60.0),
        ..Default::default()
    };
    let descriptor = describe(&overrun, format_time);
    assert_eq!(descriptor.value_now, "100.00");
    assert_eq!(descriptor.value_text, "1:15 of 1:00");
}

#[test]
fn playback_notifications_refresh_the_bar() {
    let mut h = harness(60.0, true);

    let events = h.clock.borrow_mut().advance(15.0);
    assert_eq!(events, vec![PlaybackNotification::TimeUpdate]);
    for event in events {
        h.control.on_notification(event);
    }
    let holder = h.control.seek_bar().el().clone();
    assert_eq!(holder.borrow().attr("aria-valuenow"), Some("25.00"));
    assert_eq!(holder.borrow().attr("aria-valuetext"), Some("0:15 of 1:00"));
    assert_eq!(
        h.control.seek_bar().play_progress().borrow().style("width"),
        Some("25.00%")
    );

    let events = h.clock.borrow_mut().advance(100.0);
    assert!(events.contains(&PlaybackNotification::Ended));
    for event in events {
        h.control.on_notification(event);
    }
    assert_eq!(holder.borrow().attr("aria-valuenow"), Some("100.00"));
    assert_eq!(h.control.time_display().borrow().text, "1:00");
}

#[test]
fn duration_change_refreshes_the_text() {
    let mut h = harness_with(TopLevelSurface::new(), None, false, false);
    h.clock.borrow_mut().set_current_time(30.0);

    let event = h.clock.borrow_mut().set_duration(Some(120.0));
    h.control.on_notification(event);

    let holder = h.control.seek_bar().el().clone();
    assert_eq!(holder.borrow().attr("aria-valuenow"), Some("25.00"));
    assert_eq!(holder.borrow().attr("aria-valuetext"), Some("0:30 of 2:00"));
}
