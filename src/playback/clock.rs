//! Simulated media engine.
//!
//! Advances a play head by wall-clock deltas supplied by the caller. It has no
//! decoder behind it; it exists so the progress control can be driven by a
//! realistic engine in the terminal host and in tests.

use super::handle::{PlaybackHandle, PlaybackNotification};

/// A play head over a fixed-length piece of media.
#[derive(Debug, Clone)]
pub struct MediaClock {
    current_time: f64,
    cached_time: f64,
    duration: Option<f64>,
    paused: bool,
    scrubbing: bool,
    ended: bool,
    /// Number of `pause()` calls, for observing session bracketing
    pub pause_calls: usize,
    /// Number of `play()` calls
    pub play_calls: usize,
    /// Every seek target requested, in order
    pub seeks: Vec<f64>,
}

impl MediaClock {
    /// Create a paused clock at time zero.
    ///
    /// # Arguments
    /// * `duration` - Media length in seconds, `None` if not yet known.
    ///   Negative or non-finite lengths are treated as unknown.
    pub fn new(duration: Option<f64>) -> Self {
        Self {
            current_time: 0.0,
            cached_time: 0.0,
            duration: usable_duration(duration),
            paused: true,
            scrubbing: false,
            ended: false,
            pause_calls: 0,
            play_calls: 0,
            seeks: Vec::new(),
        }
    }

    /// Set or replace the media duration.
    pub fn set_duration(&mut self, duration: Option<f64>) -> PlaybackNotification {
        self.duration = usable_duration(duration);
        PlaybackNotification::DurationChange
    }

    /// Whether the play head has reached the end since the last seek.
    pub fn ended(&self) -> bool {
        self.ended
    }

    /// Advance the play head by `dt` seconds if playing.
    ///
    /// Returns the notifications the engine would emit for this step:
    /// `TimeUpdate` whenever the play head moved, followed by `Ended` once
    /// when it reaches the end (playback then pauses).
    pub fn advance(&mut self, dt: f64) -> Vec<PlaybackNotification> {
        if self.paused || self.scrubbing || dt <= 0.0 {
            return Vec::new();
        }

        let mut events = vec![PlaybackNotification::TimeUpdate];
        self.current_time += dt;

        if let Some(duration) = self.duration {
            if self.current_time >= duration {
                self.current_time = duration;
                if !self.ended {
                    self.ended = true;
                    self.paused = true;
                    events.push(PlaybackNotification::Ended);
                }
            }
        }
        self.cached_time = self.current_time;

        events
    }
}

/// Drop lengths an engine could not report.
fn usable_duration(duration: Option<f64>) -> Option<f64> {
    duration.filter(|d| d.is_finite() && *d >= 0.0)
}

impl PlaybackHandle for MediaClock {
    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, time: f64) {
        let upper = self.duration.unwrap_or(f64::INFINITY);
        let time = time.max(0.0).min(upper);
        self.seeks.push(time);
        self.current_time = time;
        self.cached_time = time;
        self.ended = false;
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
        if self.ended {
            self.set_current_time(0.0);
        }
        self.paused = false;
    }

    fn scrubbing(&self) -> bool {
        self.scrubbing
    }

    fn set_scrubbing(&mut self, scrubbing: bool) {
        self.scrubbing = scrubbing;
    }

    fn cached_current_time(&self) -> f64 {
        self.cached_time
    }
}
