//! Clock-driven stand-in for a real media player.
//!
//! Media time advances with the wall clock scaled by the playback speed.
//! The terminal autocue polls it on every tick and forwards the time to the
//! sync session, the same way a browser player emits `timeupdate` events.

use std::time::Instant;

use tracing::{debug, info};

use super::{MediaPlayer, MediaSource};

/// Speed bounds for the simulated clock.
const MIN_SPEED: f64 = 0.1;
const MAX_SPEED: f64 = 16.0;

/// Clamp a speed into bounds; NaN and infinities fall back to normal speed.
fn bounded_speed(speed: f64) -> f64 {
    if speed.is_finite() {
        speed.clamp(MIN_SPEED, MAX_SPEED)
    } else {
        1.0
    }
}

/// Media clock without any decoding behind it.
#[derive(Debug)]
pub struct SimulatedPlayer {
    /// Whether the clock is running
    running: bool,
    /// Set once `destroy` was called; the player ignores everything after
    destroyed: bool,
    /// Playback speed multiplier (1.0 = normal)
    speed: f64,
    /// Media time at `anchor`
    time_offset: f64,
    /// Wall clock time when playback started/resumed
    anchor: Instant,
    /// Sources from the last `set_media`
    sources: Vec<MediaSource>,
}

impl SimulatedPlayer {
    pub fn new(speed: f64) -> Self {
        Self {
            running: false,
            destroyed: false,
            speed: bounded_speed(speed),
            time_offset: 0.0,
            anchor: Instant::now(),
            sources: Vec::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn sources(&self) -> &[MediaSource] {
        &self.sources
    }

    /// Media time at `now`.
    pub fn current_time_at(&self, now: Instant) -> f64 {
        if self.running {
            let elapsed = now.saturating_duration_since(self.anchor).as_secs_f64();
            self.time_offset + elapsed * self.speed
        } else {
            self.time_offset
        }
    }

    /// Media time right now.
    pub fn current_time(&self) -> f64 {
        self.current_time_at(Instant::now())
    }

    /// Time update for this tick, if the clock is running.
    pub fn poll_at(&self, now: Instant) -> Option<f64> {
        (self.running && !self.destroyed).then(|| self.current_time_at(now))
    }

    /// Time update for the current tick.
    pub fn poll(&self) -> Option<f64> {
        self.poll_at(Instant::now())
    }

    /// Restart the clock from where it was frozen.
    pub fn resume_at(&mut self, now: Instant) {
        if self.destroyed || self.running {
            return;
        }
        self.anchor = now;
        self.running = true;
        debug!(at = self.time_offset, "resumed");
    }

    pub fn resume(&mut self) {
        self.resume_at(Instant::now());
    }

    /// Freeze the clock at `now`.
    pub fn pause_at(&mut self, now: Instant) {
        if self.running {
            self.time_offset = self.current_time_at(now);
            self.running = false;
        }
    }

    /// Seek to `at` and start the clock at `now`.
    pub fn play_at(&mut self, at: f64, now: Instant) {
        if self.destroyed {
            return;
        }
        self.time_offset = at.max(0.0);
        self.anchor = now;
        self.running = true;
    }

    /// Multiply speed by 1.5 (max 16x).
    pub fn speed_up(&mut self) {
        self.set_speed(self.speed * 1.5);
    }

    /// Divide speed by 1.5 (min 0.1x).
    pub fn speed_down(&mut self) {
        self.set_speed(self.speed / 1.5);
    }

    fn set_speed(&mut self, speed: f64) {
        let now = Instant::now();
        self.time_offset = self.current_time_at(now);
        self.anchor = now;
        self.speed = bounded_speed(speed);
    }
}

impl MediaPlayer for SimulatedPlayer {
    fn set_media(&mut self, sources: &[MediaSource]) {
        if self.destroyed {
            return;
        }
        for source in sources {
            info!(format = %source.format, location = %source.location.display(), "media source");
        }
        self.sources = sources.to_vec();
        self.running = false;
        self.time_offset = 0.0;
    }

    fn play(&mut self, at: f64) {
        self.play_at(at, Instant::now());
    }

    fn pause(&mut self) {
        self.pause_at(Instant::now());
    }

    fn stop(&mut self) {
        self.running = false;
        self.time_offset = 0.0;
    }

    fn destroy(&mut self) {
        self.running = false;
        self.destroyed = true;
        self.sources.clear();
        debug!("simulated player destroyed");
    }
}
