//! Terminal host for the progress control.
//!
//! Runs a simulated engine and a progress control in the terminal. The bar
//! row is the control's own element; the whole screen is the top-level
//! surface, so drag events that land off the bar only reach the control
//! while its listeners are registered there.

pub mod status_footer;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info};

use crate::config::Config;
use crate::control::{InputSurface, ListenerKind, ProgressControl, ScrubState, TopLevelSurface};
use crate::dom::{Element, Measure};
use crate::format::format_time;
use crate::playback::{MediaClock, PlaybackHandle};

use super::layout::{cell_pointer, ScreenLayout};
use super::measure::{TerminalMeasure, PLAYER_CLASS};
use super::theme::Theme;
use super::view::{aria_summary, render_bar, render_time};
use status_footer::{render_footer, render_status_line, status_text};

/// Result of processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Exit the player
    Quit,
}

/// Where a mouse event was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routed {
    /// To the bar's own element
    Local,
    /// Through a listener on the top-level surface
    Surface,
    /// Nowhere
    Dropped,
}

/// Host options that are not part of the config file.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    /// Refuse top-level listener registration, as an embedded player would see
    pub restricted_surface: bool,
    pub theme: Theme,
}

const FOOTER_KEYS: &[(&str, &str)] = &[
    ("q", "quit"),
    ("space", "play/pause"),
    ("←/→", "seek 5s"),
    ("drag", "scrub"),
];

pub struct PlayerApp {
    clock: Rc<RefCell<MediaClock>>,
    surface: Rc<RefCell<TopLevelSurface>>,
    measure: Rc<TerminalMeasure>,
    control: ProgressControl<MediaClock>,
    layout: ScreenLayout,
    theme: Theme,
    tick: Duration,
}

impl PlayerApp {
    /// Build the app for a screen of size `area`.
    pub fn new(config: &Config, options: PlayOptions, area: Rect) -> Self {
        let mut clock = MediaClock::new(Some(config.player.duration));
        if config.player.autoplay {
            clock.play();
        }
        let clock = Rc::new(RefCell::new(clock));

        let surface = Rc::new(RefCell::new(if options.restricted_surface {
            TopLevelSurface::restricted()
        } else {
            TopLevelSurface::new()
        }));

        let layout = ScreenLayout::new(area);
        let measure = Rc::new(TerminalMeasure::new(area.width, layout.bar.width));

        let dyn_surface: Rc<RefCell<dyn InputSurface>> = surface.clone();
        let dyn_measure: Rc<dyn Measure> = measure.clone();
        let mut control = ProgressControl::new(
            Rc::clone(&clock),
            dyn_surface,
            dyn_measure,
            Element::create("div", PLAYER_CLASS),
            &config.progress_control,
        );
        control.set_bounds(layout.bar_bounds());
        control.update_progress();

        info!(
            duration = config.player.duration,
            restricted = options.restricted_surface,
            keep_tooltips_inside = config.progress_control.keep_tooltips_inside,
            "player started"
        );

        Self {
            clock,
            surface,
            measure,
            control,
            layout,
            theme: options.theme,
            tick: Duration::from_millis(config.player.tick_ms.max(10)),
        }
    }

    pub fn control(&self) -> &ProgressControl<MediaClock> {
        &self.control
    }

    pub fn clock(&self) -> &Rc<RefCell<MediaClock>> {
        &self.clock
    }

    pub fn surface(&self) -> &Rc<RefCell<TopLevelSurface>> {
        &self.surface
    }

    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    /// Recompute the layout after the terminal changed size.
    pub fn resize(&mut self, area: Rect) {
        self.layout = ScreenLayout::new(area);
        self.measure.resize(area.width, self.layout.bar.width);
        self.control.set_bounds(self.layout.bar_bounds());
        self.control.update_progress();
    }

    /// Advance the engine by `dt` seconds and forward its notifications.
    pub fn tick(&mut self, dt: f64) {
        let events = self.clock.borrow_mut().advance(dt);
        for notification in events {
            self.control.on_notification(notification);
        }
    }

    pub fn handle_event(&mut self, event: Event) -> InputResult {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.route_mouse(mouse);
                InputResult::Continue
            }
            Event::Resize(cols, rows) => {
                self.resize(Rect::new(0, 0, cols, rows));
                InputResult::Continue
            }
            _ => InputResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                InputResult::Quit
            }
            KeyCode::Char(' ') => {
                self.toggle_pause();
                InputResult::Continue
            }
            code => {
                self.control.handle_key(code);
                InputResult::Continue
            }
        }
    }

    fn toggle_pause(&mut self) {
        if self.control.state() != ScrubState::Idle {
            return;
        }
        let mut clock = self.clock.borrow_mut();
        if clock.paused() {
            clock.play();
        } else {
            clock.pause();
        }
    }

    /// Deliver a mouse event the way a browser would.
    ///
    /// Events over the bar always reach it. Events elsewhere reach it only
    /// through a listener registered on the top-level surface.
    pub fn route_mouse(&mut self, mouse: MouseEvent) -> Routed {
        let pointer = cell_pointer(mouse.column, mouse.row);
        let on_bar = self.layout.on_bar(mouse.column, mouse.row);
        let listening = |kind| self.surface.borrow().is_listening(kind);

        let routed = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if on_bar => {
                self.control.handle_pointer_down(pointer);
                Routed::Local
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                if on_bar {
                    self.control.handle_pointer_move(pointer);
                    Routed::Local
                } else if listening(ListenerKind::PointerMove) {
                    self.control.handle_surface_move(pointer);
                    Routed::Surface
                } else {
                    Routed::Dropped
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if on_bar {
                    self.control.handle_pointer_up();
                    Routed::Local
                } else if listening(ListenerKind::PointerUp) {
                    self.control.handle_surface_up();
                    Routed::Surface
                } else {
                    Routed::Dropped
                }
            }
            _ => Routed::Dropped,
        };

        if routed == Routed::Dropped && self.control.state().is_scrubbing() {
            debug!(?mouse.kind, "pointer event outside the bar not delivered");
        }
        routed
    }

    pub fn draw(&self, frame: &mut Frame) {
        let theme = &self.theme;
        let clock = self.clock.borrow();
        let duration = clock.duration().unwrap_or(0.0);

        let header = format!(
            "seekbar  {}",
            if clock.paused() { "paused" } else { "playing" }
        );
        frame.render_widget(
            Paragraph::new(header).style(theme.text_style()),
            self.layout.header,
        );

        let buf = frame.buffer_mut();
        render_bar(buf, &self.layout, &self.control, theme);
        render_time(
            buf,
            self.layout.time,
            self.control.time_display(),
            &format_time(duration, duration),
            theme,
        );

        let surface = self.surface.borrow();
        let status = status_text(
            self.control.state(),
            &surface,
            &aria_summary(self.control.seek_bar().el()),
        );
        render_status_line(
            frame,
            self.layout.status,
            &status,
            surface.is_restricted(),
            theme,
        );
        render_footer(frame, self.layout.footer, FOOTER_KEYS, theme);
    }

    /// Event loop: draw, wait for input up to the next tick, advance the engine.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let mut last_tick = Instant::now();
        loop {
            terminal.draw(|frame| self.draw(frame))?;

            let timeout = self.tick.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? && self.handle_event(event::read()?) == InputResult::Quit {
                break;
            }

            let elapsed = last_tick.elapsed();
            if elapsed >= self.tick {
                self.tick(elapsed.as_secs_f64());
                last_tick = Instant::now();
            }
        }
        Ok(())
    }
}

/// Set up the terminal, run the player, and restore the terminal.
#[cfg(not(tarpaulin_include))]
pub fn run(config: &Config, options: PlayOptions) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = (|| -> Result<()> {
        execute!(io::stdout(), EnableMouseCapture)?;
        let size = terminal.size()?;
        let app = PlayerApp::new(config, options, Rect::new(0, 0, size.width, size.height));
        app.run(&mut terminal)
    })();
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}
