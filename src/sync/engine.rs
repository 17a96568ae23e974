//! Playback-time to transcript-line synchronization.
//!
//! [`SyncEngine`] is a small `Copy` value. Every transition takes the
//! current engine by value and returns the next one along with what the
//! player has to be told, so the logic runs without a live player.

use std::fmt;

use tracing::{debug, trace};

use super::window::Window;
use crate::player::PlayerCommand;
use crate::transcript::Transcript;

/// Playback status as seen by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineStatus {
    /// Player stopped or not started yet
    #[default]
    Idle,
    Playing,
    Paused,
}

/// What a single time update did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Time passed the window end; the player is rewound and held
    Overrun { rewind_to: f64 },
    /// Time crossed the end of the active line
    Advanced { from: usize, to: usize },
    /// Still inside the active line
    Within,
}

impl TickOutcome {
    /// Player commands this outcome requires.
    pub fn commands(&self) -> Vec<PlayerCommand> {
        match self {
            Self::Overrun { rewind_to } => vec![
                PlayerCommand::Play { at: *rewind_to },
                PlayerCommand::Pause,
            ],
            Self::Advanced { .. } | Self::Within => Vec::new(),
        }
    }

    pub fn is_overrun(&self) -> bool {
        matches!(self, Self::Overrun { .. })
    }
}

impl fmt::Display for TickOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overrun { rewind_to } => write!(f, "overrun, rewind to {:.3}", rewind_to),
            Self::Advanced { from, to } => write!(f, "advance {} -> {}", from, to),
            Self::Within => write!(f, "within"),
        }
    }
}

/// Active-line cursor for one window.
///
/// Invariant: `window.start_line <= current_line <= window.end_line`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncEngine {
    window: Window,
    current_line: usize,
    start_time: f64,
    end_time: f64,
    status: EngineStatus,
}

impl SyncEngine {
    /// Reset onto `window` and start playing from its first line.
    ///
    /// Caller contract: `window.end_line < transcript.len()`; descriptors
    /// that passed validation always satisfy it.
    pub fn initialize(window: Window, transcript: &Transcript) -> (Self, Vec<PlayerCommand>) {
        let engine = Self {
            status: EngineStatus::Playing,
            ..Self::idle(window, transcript)
        };
        debug!(
            %window,
            start_time = engine.start_time,
            end_time = engine.end_time,
            "sync engine initialized"
        );
        let commands = vec![PlayerCommand::Play {
            at: engine.start_time,
        }];
        (engine, commands)
    }

    /// Reset onto `window` without touching the player.
    ///
    /// Same caller contract as [`SyncEngine::initialize`].
    pub fn idle(window: Window, transcript: &Transcript) -> Self {
        Self {
            window,
            current_line: window.start_line,
            start_time: window.start_time(transcript),
            end_time: window.end_time(transcript),
            status: EngineStatus::Idle,
        }
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub fn current_line(&self) -> usize {
        self.current_line
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    pub fn status(&self) -> EngineStatus {
        self.status
    }

    /// Apply one time update from the player.
    ///
    /// Checks run in order, first match wins:
    /// 1. `time > end_time`: rewind to the window start and pause.
    /// 2. `time > to` of the active line: move to the next line.
    /// 3. otherwise nothing changes.
    ///
    /// Both comparisons are strict; a time equal to a boundary is still
    /// inside. At most one line is advanced per update. A time update
    /// while idle or paused means the player is running again.
    pub fn on_time_update(self, transcript: &Transcript, time: f64) -> (Self, TickOutcome) {
        if time > self.end_time {
            debug!(time, end_time = self.end_time, "window overrun");
            let next = Self {
                current_line: self.window.start_line,
                status: EngineStatus::Paused,
                ..self
            };
            return (
                next,
                TickOutcome::Overrun {
                    rewind_to: self.start_time,
                },
            );
        }

        let status = EngineStatus::Playing;
        if time > transcript[self.current_line].to {
            let to = (self.current_line + 1).min(self.window.end_line);
            trace!(from = self.current_line, to, time, "line crossed");
            let next = Self {
                current_line: to,
                status,
                ..self
            };
            return (
                next,
                TickOutcome::Advanced {
                    from: self.current_line,
                    to,
                },
            );
        }

        (Self { status, ..self }, TickOutcome::Within)
    }

    /// Hold playback where it is, independent of time.
    pub fn pause(self) -> (Self, Vec<PlayerCommand>) {
        let next = Self {
            status: EngineStatus::Paused,
            ..self
        };
        (next, vec![PlayerCommand::Pause])
    }
}
