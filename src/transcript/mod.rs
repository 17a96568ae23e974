//! Time-aligned transcript model
//!
//! A transcript is an ordered list of [`AnnotationLine`]s, each spanning
//! `[from, to]` seconds of media and holding the spoken words as
//! [`WordToken`]s. A [`MediaDescriptor`] ties a transcript to its media
//! file and to the line range a caller wants to play.
//!
//! Descriptors are validated when loaded, so the sync core can index lines
//! without further checks.

mod de;
mod descriptor;
mod error;
mod word;

use std::ops::Index;

use serde::{Deserialize, Serialize};

pub use descriptor::{MediaDescriptor, MovieInfo, DEFAULT_DISPLAY_ATTRIBUTE};
pub use error::TranscriptError;
pub use word::WordToken;

/// One time-stamped line of the transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationLine {
    /// Start timecode in seconds
    #[serde(deserialize_with = "de::seconds")]
    pub from: f64,
    /// End timecode in seconds
    #[serde(deserialize_with = "de::seconds")]
    pub to: f64,
    #[serde(default)]
    pub speaker: String,
    #[serde(default, rename = "line")]
    pub words: Vec<WordToken>,
}

impl AnnotationLine {
    pub fn new(from: f64, to: f64, speaker: impl Into<String>, words: Vec<WordToken>) -> Self {
        Self {
            from,
            to,
            speaker: speaker.into(),
            words,
        }
    }

    /// Length of the line in seconds.
    pub fn duration(&self) -> f64 {
        self.to - self.from
    }

    /// Join the display attribute of every word.
    pub fn text(&self, display_attribute: &str) -> String {
        self.words
            .iter()
            .map(|w| w.display(display_attribute))
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Ordered, immutable list of annotation lines.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transcript {
    lines: Vec<AnnotationLine>,
}

impl Transcript {
    pub fn new(lines: Vec<AnnotationLine>) -> Self {
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AnnotationLine> {
        self.lines.get(index)
    }

    pub fn lines(&self) -> &[AnnotationLine] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnnotationLine> {
        self.lines.iter()
    }

    pub(crate) fn into_lines(self) -> Vec<AnnotationLine> {
        self.lines
    }

    /// Require at least one line and a non-empty span on every line.
    pub fn validate(&self) -> Result<(), TranscriptError> {
        if self.lines.is_empty() {
            return Err(TranscriptError::EmptyTranscript);
        }
        for (idx, line) in self.lines.iter().enumerate() {
            if line.from.is_nan() || line.to.is_nan() || line.from >= line.to {
                return Err(TranscriptError::InvalidTimespan {
                    line: idx,
                    from: line.from,
                    to: line.to,
                });
            }
        }
        Ok(())
    }
}

impl Index<usize> for Transcript {
    type Output = AnnotationLine;

    fn index(&self, index: usize) -> &Self::Output {
        &self.lines[index]
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a AnnotationLine;
    type IntoIter = std::slice::Iter<'a, AnnotationLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl From<Vec<AnnotationLine>> for Transcript {
    fn from(lines: Vec<AnnotationLine>) -> Self {
        Self::new(lines)
    }
}
