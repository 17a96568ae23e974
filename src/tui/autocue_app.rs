//! Terminal autocue: plays a descriptor against a simulated clock.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use super::input::{map_key, move_cursor, Action, Overlays};
use super::render::{draw, ClockStatus, ViewState};
use crate::player::SimulatedPlayer;
use crate::sync::{DragOutcome, SyncSession};

/// Interactive view state around a sync session.
pub struct AutocueApp {
    session: SyncSession<SimulatedPlayer>,
    view: ViewState,
    tick_interval: Duration,
    should_quit: bool,
}

impl AutocueApp {
    /// Wrap a mounted session. The cursor starts on the active line.
    pub fn new(session: SyncSession<SimulatedPlayer>, tick_interval: Duration) -> Self {
        let view = ViewState {
            cursor: session.current_line(),
            show_help: false,
        };
        Self {
            session,
            view,
            tick_interval,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &SyncSession<SimulatedPlayer> {
        &self.session
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn overlays(&self) -> Overlays {
        Overlays {
            help: self.view.show_help,
            inspect: self.session.inspecting().is_some(),
        }
    }

    fn clock(&self) -> ClockStatus {
        let player = self.session.player();
        ClockStatus {
            time: player.current_time(),
            running: player.is_running(),
            speed: player.speed(),
        }
    }

    /// Forward the player's time, if it is running.
    pub fn tick(&mut self) {
        if let Some(time) = self.session.player().poll() {
            self.session.on_time_update(time);
        }
    }

    /// Apply one user action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::TogglePause => {
                if self.session.player().is_running() {
                    self.session.pause_player();
                } else {
                    self.session.close_inspection();
                    self.session.player_mut().resume();
                }
            }
            Action::NudgeStart(delta) => {
                let proposed = self.session.range().nudge_start(delta);
                self.drag(proposed);
            }
            Action::NudgeEnd(delta) => {
                let proposed = self.session.range().nudge_end(delta);
                self.drag(proposed);
            }
            Action::MoveCursor(delta) => {
                let len = self.session.descriptor().transcript.len();
                self.view.cursor = move_cursor(self.view.cursor, delta, len);
            }
            Action::ToggleInspect => {
                self.session.toggle_inspection(self.view.cursor);
            }
            Action::SpeedUp => self.session.player_mut().speed_up(),
            Action::SpeedDown => self.session.player_mut().speed_down(),
            Action::ToggleHelp => self.view.show_help = !self.view.show_help,
            Action::Close => {
                if self.view.show_help {
                    self.view.show_help = false;
                } else {
                    self.session.close_inspection();
                }
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn drag(&mut self, proposed: crate::sync::SliderValues) {
        if let DragOutcome::Accepted(window) = self.session.on_drag(proposed) {
            self.view.cursor = window.start_line;
        }
    }

    /// Event loop: redraw, wait for a key or the next tick.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let mut last_tick = Instant::now();

        while !self.should_quit {
            terminal.draw(|frame| draw(frame, &self.session, self.clock(), self.view))?;

            let timeout = self.tick_interval.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(action) = map_key(key, self.overlays()) {
                            debug!(?action, "key action");
                            self.apply(action);
                        }
                    }
                }
            }

            if last_tick.elapsed() >= self.tick_interval {
                self.tick();
                last_tick = Instant::now();
            }
        }
        Ok(())
    }
}

/// Take over the terminal and run the autocue until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run(session: SyncSession<SimulatedPlayer>, tick_interval: Duration) -> Result<()> {
    info!(movie = %session.descriptor().movie.movie_loc, "starting autocue view");
    let mut app = AutocueApp::new(session, tick_interval);
    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result
}
