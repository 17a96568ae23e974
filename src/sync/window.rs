//! Line windows and their derivation from a media descriptor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::transcript::{MediaDescriptor, Transcript};

/// The full line range a window may occupy, `[min_start, max_end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBounds {
    pub min_start: usize,
    pub max_end: usize,
}

impl LineBounds {
    pub fn new(min_start: usize, max_end: usize) -> Self {
        debug_assert!(min_start <= max_end, "inverted line bounds");
        Self { min_start, max_end }
    }

    pub fn contains(&self, line: usize) -> bool {
        self.min_start <= line && line <= self.max_end
    }

    /// Clamp a line into the bounds.
    pub fn clamp(&self, line: usize) -> usize {
        line.clamp(self.min_start, self.max_end)
    }

    /// The widest window the bounds allow.
    pub fn full_window(&self) -> Window {
        Window::new(self.min_start, self.max_end)
    }
}

/// Inclusive range of selected lines, `start_line <= end_line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    pub start_line: usize,
    pub end_line: usize,
}

impl Window {
    pub fn new(start_line: usize, end_line: usize) -> Self {
        debug_assert!(start_line <= end_line, "inverted window");
        Self {
            start_line,
            end_line,
        }
    }

    /// A window covering exactly one line.
    pub fn single(line: usize) -> Self {
        Self::new(line, line)
    }

    pub fn contains(&self, line: usize) -> bool {
        self.start_line <= line && line <= self.end_line
    }

    /// Number of lines in the window.
    pub fn len(&self) -> usize {
        self.end_line - self.start_line + 1
    }

    /// Windows always hold at least one line.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Media time at which the window starts.
    ///
    /// Caller contract: `end_line < transcript.len()`.
    pub fn start_time(&self, transcript: &Transcript) -> f64 {
        transcript[self.start_line].from
    }

    /// Media time at which the window ends.
    ///
    /// Caller contract: `end_line < transcript.len()`.
    pub fn end_time(&self, transcript: &Transcript) -> f64 {
        transcript[self.end_line].to
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start_line, self.end_line)
    }
}

/// How many lines beyond the requested span are selected up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextLines {
    /// Exactly the requested `[start_at, end_at]`
    #[default]
    Exact,
    /// Everything in `[min_start, max_end]`
    All,
    /// `n` extra lines on each side, stopping at the bounds
    Lines(usize),
}

impl ContextLines {
    /// Normalize a count: zero context is the same as none.
    pub fn count(n: usize) -> Self {
        if n == 0 {
            Self::Exact
        } else {
            Self::Lines(n)
        }
    }
}

/// Error parsing a [`ContextLines`] value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid context lines '{0}': expected 'all', 'none' or a line count")]
pub struct ParseContextLinesError(String);

impl FromStr for ContextLines {
    type Err = ParseContextLinesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "" | "none" => Ok(Self::Exact),
            other => other
                .parse::<usize>()
                .map(Self::count)
                .map_err(|_| ParseContextLinesError(s.to_string())),
        }
    }
}

impl fmt::Display for ContextLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "none"),
            Self::All => write!(f, "all"),
            Self::Lines(n) => write!(f, "{}", n),
        }
    }
}

impl Serialize for ContextLines {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Lines(n) => serializer.serialize_u64(*n as u64),
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for ContextLines {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Count(u64),
            Word(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Count(n) => Ok(Self::count(n as usize)),
            Raw::Word(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Derive the first window for a descriptor.
///
/// Numeric context widens `[start_at, end_at]` by `n` lines per side; a
/// side that would cross its bound stops at the bound and the surplus is
/// not moved to the other side.
pub fn compute_initial_window(descriptor: &MediaDescriptor, context: ContextLines) -> Window {
    let bounds = descriptor.bounds();
    match context {
        ContextLines::Exact => Window::new(descriptor.start_at, descriptor.end_at),
        ContextLines::All => bounds.full_window(),
        ContextLines::Lines(n) => {
            let start = descriptor
                .start_at
                .checked_sub(n)
                .filter(|&line| line >= bounds.min_start)
                .unwrap_or(bounds.min_start);
            let end = descriptor
                .end_at
                .saturating_add(n)
                .min(bounds.max_end);
            Window::new(start, end)
        }
    }
}
