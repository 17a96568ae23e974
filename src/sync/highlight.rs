//! Per-line highlight classification for the transcript view.
//!
//! Classification is a pure function of the window, the active line and the
//! border anchors. It is recomputed on every render and never stored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::window::Window;
use crate::transcript::{AnnotationLine, Transcript};

/// How a transcript line is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineHighlight {
    /// The line being spoken right now
    Active,
    /// Inside the selected window
    InWindow,
    /// Outside the window, shown faintly as context at the edges
    Dimmed,
    Hidden,
}

impl LineHighlight {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// One-letter code used in plain-text listings.
    pub fn code(&self) -> char {
        match self {
            Self::Active => '>',
            Self::InWindow => '|',
            Self::Dimmed => '.',
            Self::Hidden => ' ',
        }
    }
}

/// Which window the dimmed edge lines are measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderPolicy {
    /// Anchors are captured from the window derived for the descriptor and
    /// kept across drags, so the originally requested edges stay visible
    Initial,
    /// Anchors follow the current window after every accepted drag
    #[default]
    Live,
}

impl fmt::Display for BorderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => write!(f, "initial"),
            Self::Live => write!(f, "live"),
        }
    }
}

/// Error parsing a [`BorderPolicy`] value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid border policy '{0}': expected 'initial' or 'live'")]
pub struct ParseBorderPolicyError(String);

impl FromStr for BorderPolicy {
    type Err = ParseBorderPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "initial" => Ok(Self::Initial),
            "live" => Ok(Self::Live),
            _ => Err(ParseBorderPolicyError(s.to_string())),
        }
    }
}

/// Timecodes marking the outermost lines of a window.
///
/// A line outside the window is dimmed when it starts exactly where the
/// anchor window starts or ends exactly where it ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderAnchors {
    pub first_start: f64,
    pub last_end: f64,
}

impl BorderAnchors {
    /// Capture anchors from a window.
    ///
    /// Caller contract: `window.end_line < transcript.len()`.
    pub fn capture(window: Window, transcript: &Transcript) -> Self {
        Self {
            first_start: window.start_time(transcript),
            last_end: window.end_time(transcript),
        }
    }

    /// Whether `line` shares a border timecode with the anchors.
    pub fn borders(&self, line: &AnnotationLine) -> bool {
        line.from == self.first_start || line.to == self.last_end
    }
}

/// Classify line `index`.
///
/// Precedence is fixed, first match wins: active, in-window, dimmed edge,
/// hidden.
pub fn classify(
    index: usize,
    line: &AnnotationLine,
    window: Window,
    current_line: usize,
    anchors: BorderAnchors,
) -> LineHighlight {
    if index == current_line {
        LineHighlight::Active
    } else if window.contains(index) {
        LineHighlight::InWindow
    } else if anchors.borders(line) {
        LineHighlight::Dimmed
    } else {
        LineHighlight::Hidden
    }
}

/// Classify every line of a transcript.
pub fn classify_all(
    transcript: &Transcript,
    window: Window,
    current_line: usize,
    anchors: BorderAnchors,
) -> Vec<LineHighlight> {
    transcript
        .iter()
        .enumerate()
        .map(|(index, line)| classify(index, line, window, current_line, anchors))
        .collect()
}
