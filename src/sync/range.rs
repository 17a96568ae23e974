//! Dual-handle range control over the transcript lines.
//!
//! The control's numeric range always spans `[0, last_line]`. The upper
//! handle sits one past the last selected line, so a single-line window is
//! still two distinct handle positions that can be grabbed and dragged.

use std::ops::RangeInclusive;

use tracing::debug;

use super::window::{LineBounds, Window};

/// Handle positions of the range control, `high` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderValues {
    pub low: usize,
    pub high: usize,
}

impl SliderValues {
    pub fn new(low: usize, high: usize) -> Self {
        Self { low, high }
    }

    /// Handle positions that represent `window`.
    pub fn from_window(window: Window) -> Self {
        Self {
            low: window.start_line,
            high: window.end_line + 1,
        }
    }

    /// Width of the span in control units.
    pub fn span(&self) -> isize {
        self.high as isize - self.low as isize
    }
}

/// Result of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The proposed span covered less than one line; nothing changed
    Rejected,
    /// The window was replaced; the player must stop and restart
    Accepted(Window),
}

/// Owner of the selected line window.
///
/// The window is only ever replaced here: once from the descriptor, then by
/// accepted drags. An accepted drag raises a restart flag that the engine
/// consumes on the next update cycle.
#[derive(Debug, Clone)]
pub struct RangeController {
    window: Window,
    bounds: LineBounds,
    last_line: usize,
    restart_requested: bool,
}

impl RangeController {
    /// Create a controller for an already-derived window.
    pub fn new(window: Window, bounds: LineBounds, last_line: usize) -> Self {
        Self {
            window,
            bounds,
            last_line,
            restart_requested: false,
        }
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub fn bounds(&self) -> LineBounds {
        self.bounds
    }

    /// Numeric range of the control.
    pub fn slider_range(&self) -> RangeInclusive<usize> {
        0..=self.last_line
    }

    /// Current handle positions.
    pub fn slider_values(&self) -> SliderValues {
        SliderValues::from_window(self.window)
    }

    pub fn restart_requested(&self) -> bool {
        self.restart_requested
    }

    /// Evaluate a drag gesture.
    ///
    /// A span narrower than one line is rejected and leaves the controller
    /// untouched. Otherwise the handles are clamped to the descriptor's line
    /// bounds, the resulting window replaces the current one, and a restart
    /// is requested.
    pub fn on_drag(&mut self, proposed: SliderValues) -> DragOutcome {
        if proposed.span() < 1 {
            debug!(low = proposed.low, high = proposed.high, "rejected range drag");
            return DragOutcome::Rejected;
        }

        let start = self.bounds.clamp(proposed.low);
        let end = self.bounds.clamp(proposed.high - 1);
        let window = Window::new(start, end);

        debug!(%window, "accepted range drag");
        self.window = window;
        self.restart_requested = true;
        DragOutcome::Accepted(window)
    }

    /// Consume a pending restart, returning the window to restart in.
    pub fn take_restart(&mut self) -> Option<Window> {
        if self.restart_requested {
            self.restart_requested = false;
            Some(self.window)
        } else {
            None
        }
    }

    /// Drop a pending restart without acting on it.
    pub fn clear_restart(&mut self) {
        self.restart_requested = false;
    }

    /// Move the lower handle by `delta` lines.
    pub fn nudge_start(&self, delta: isize) -> SliderValues {
        let values = self.slider_values();
        SliderValues::new(self.step(values.low, delta), values.high)
    }

    /// Move the upper handle by `delta` lines.
    pub fn nudge_end(&self, delta: isize) -> SliderValues {
        let values = self.slider_values();
        SliderValues::new(values.low, self.step(values.high, delta))
    }

    fn step(&self, value: usize, delta: isize) -> usize {
        value
            .saturating_add_signed(delta)
            .min(self.last_line.saturating_add(1))
    }
}
