//! Event glue between the sync core, the view and a media player.
//!
//! A [`SyncSession`] lives exactly as long as the mounted view. Every event
//! (time update, drag, pause request, descriptor replacement) is handled to
//! completion before the next one, and each handler ends with an update
//! cycle that consumes a pending restart. Dropping the session destroys the
//! player, so no time update can arrive after teardown.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use super::engine::{EngineStatus, SyncEngine, TickOutcome};
use super::highlight::{classify, classify_all, BorderAnchors, BorderPolicy, LineHighlight};
use super::range::{DragOutcome, RangeController, SliderValues};
use super::window::{compute_initial_window, ContextLines, Window};
use crate::player::{MediaPlayer, MediaType};
use crate::transcript::MediaDescriptor;

/// Settings that shape a session but are not part of the descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    pub context_lines: ContextLines,
    pub border_policy: BorderPolicy,
    pub media_root: PathBuf,
    pub media_type: MediaType,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            context_lines: ContextLines::Exact,
            border_policy: BorderPolicy::default(),
            media_root: PathBuf::from("media"),
            media_type: MediaType::Video,
        }
    }
}

/// A mounted transcript view bound to one player.
pub struct SyncSession<P: MediaPlayer> {
    descriptor: MediaDescriptor,
    options: SessionOptions,
    range: RangeController,
    engine: SyncEngine,
    anchors: BorderAnchors,
    /// Line whose inspection overlay is open
    inspecting: Option<usize>,
    player: P,
}

impl<P: MediaPlayer> SyncSession<P> {
    /// Mount a descriptor: derive the window, load the media and start
    /// playing from the window start.
    ///
    /// The descriptor must have passed [`MediaDescriptor::validate`].
    pub fn mount(descriptor: MediaDescriptor, options: SessionOptions, mut player: P) -> Self {
        let (range, anchors) = Self::derive(&descriptor, &options);
        player.set_media(&descriptor.sources(&options.media_root, options.media_type));
        let (engine, commands) = SyncEngine::initialize(range.window(), &descriptor.transcript);
        player.apply_all(&commands);

        info!(
            movie = %descriptor.movie.movie_loc,
            window = %range.window(),
            context = %options.context_lines,
            "session mounted"
        );

        Self {
            descriptor,
            options,
            range,
            engine,
            anchors,
            inspecting: None,
            player,
        }
    }

    fn derive(descriptor: &MediaDescriptor, options: &SessionOptions) -> (RangeController, BorderAnchors) {
        let window = compute_initial_window(descriptor, options.context_lines);
        let range = RangeController::new(window, descriptor.bounds(), descriptor.last_line);
        let anchors = BorderAnchors::capture(window, &descriptor.transcript);
        (range, anchors)
    }

    /// Handle a periodic time update from the player.
    pub fn on_time_update(&mut self, time: f64) -> TickOutcome {
        let (engine, outcome) = self.engine.on_time_update(&self.descriptor.transcript, time);
        self.engine = engine;

        match outcome {
            TickOutcome::Overrun { .. } => {
                self.player.apply_all(&outcome.commands());
                self.range.clear_restart();
            }
            TickOutcome::Advanced { .. } => self.range.clear_restart(),
            TickOutcome::Within => {}
        }

        self.on_restart_requested();
        outcome
    }

    /// Handle a drag gesture on the range control.
    ///
    /// Rejected gestures change nothing. An accepted one replaces the
    /// window, stops the player, resets the cursor and then restarts
    /// playback at the new window start.
    pub fn on_drag(&mut self, proposed: SliderValues) -> DragOutcome {
        let outcome = self.range.on_drag(proposed);
        if let DragOutcome::Accepted(window) = outcome {
            self.player.stop();
            self.engine = SyncEngine::idle(window, &self.descriptor.transcript);
            if self.options.border_policy == BorderPolicy::Live {
                self.anchors = BorderAnchors::capture(window, &self.descriptor.transcript);
            }
        }

        self.on_restart_requested();
        outcome
    }

    /// Consume a pending restart, replaying from the window start.
    ///
    /// Returns true if a restart ran. Runs at most once per accepted drag.
    pub fn on_restart_requested(&mut self) -> bool {
        let Some(window) = self.range.take_restart() else {
            return false;
        };
        let (engine, commands) = SyncEngine::initialize(window, &self.descriptor.transcript);
        self.engine = engine;
        self.player.apply_all(&commands);
        debug!(%window, "restarted in new window");
        true
    }

    /// Pause playback on behalf of the view (e.g. an inspection overlay).
    pub fn pause_player(&mut self) {
        let (engine, commands) = self.engine.pause();
        self.engine = engine;
        self.player.apply_all(&commands);
    }

    /// Open the inspection overlay for `line`, or close it if it is open.
    ///
    /// Opening pauses playback. Returns true when the overlay is open
    /// afterwards.
    pub fn toggle_inspection(&mut self, line: usize) -> bool {
        if line >= self.descriptor.transcript.len() {
            warn!(line, "inspection requested for a line outside the transcript");
            return self.inspecting.is_some();
        }

        if self.inspecting == Some(line) {
            self.inspecting = None;
            false
        } else {
            self.inspecting = Some(line);
            self.pause_player();
            true
        }
    }

    pub fn close_inspection(&mut self) {
        self.inspecting = None;
    }

    pub fn inspecting(&self) -> Option<usize> {
        self.inspecting
    }

    /// Time span of the inspected line.
    pub fn inspection_span(&self) -> Option<(f64, f64)> {
        self.inspecting
            .and_then(|line| self.descriptor.transcript.get(line))
            .map(|line| (line.from, line.to))
    }

    /// Swap in a new descriptor.
    ///
    /// A descriptor equal in content to the current one is ignored, whatever
    /// its origin. Otherwise window, cursor and anchors are rebuilt, the
    /// media reloaded and playback restarted. Returns true if anything
    /// changed.
    pub fn replace_descriptor(&mut self, descriptor: MediaDescriptor) -> bool {
        if descriptor == self.descriptor {
            return false;
        }

        self.player.stop();
        let (range, anchors) = Self::derive(&descriptor, &self.options);
        self.player.set_media(&descriptor.sources(&self.options.media_root, self.options.media_type));
        let (engine, commands) = SyncEngine::initialize(range.window(), &descriptor.transcript);
        self.player.apply_all(&commands);

        info!(
            movie = %descriptor.movie.movie_loc,
            window = %range.window(),
            "descriptor replaced"
        );

        self.descriptor = descriptor;
        self.range = range;
        self.anchors = anchors;
        self.engine = engine;
        self.inspecting = None;
        true
    }

    /// Highlight of a single line.
    ///
    /// Caller contract: `line < descriptor().transcript.len()`.
    pub fn highlight(&self, line: usize) -> LineHighlight {
        classify(
            line,
            &self.descriptor.transcript[line],
            self.range.window(),
            self.engine.current_line(),
            self.anchors,
        )
    }

    /// Highlight of every line, in transcript order.
    pub fn highlights(&self) -> Vec<LineHighlight> {
        classify_all(
            &self.descriptor.transcript,
            self.range.window(),
            self.engine.current_line(),
            self.anchors,
        )
    }

    /// Title the view should show above the player.
    pub fn display_title(&self) -> &str {
        match (self.inspecting, self.descriptor.title.as_deref()) {
            (Some(_), Some(title)) => title,
            _ => self.descriptor.player_title(),
        }
    }

    pub fn descriptor(&self) -> &MediaDescriptor {
        &self.descriptor
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn window(&self) -> Window {
        self.range.window()
    }

    pub fn range(&self) -> &RangeController {
        &self.range
    }

    pub fn engine(&self) -> &SyncEngine {
        &self.engine
    }

    pub fn anchors(&self) -> BorderAnchors {
        self.anchors
    }

    pub fn current_line(&self) -> usize {
        self.engine.current_line()
    }

    pub fn status(&self) -> EngineStatus {
        self.engine.status()
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }
}

impl<P: MediaPlayer> Drop for SyncSession<P> {
    fn drop(&mut self) {
        self.player.destroy();
        debug!("session unmounted, player destroyed");
    }
}
