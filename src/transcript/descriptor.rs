//! Media descriptor: one playable unit and its transcript.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::de;
use super::error::TranscriptError;
use super::{AnnotationLine, Transcript};
use crate::player::{MediaSource, MediaType};
use crate::sync::LineBounds;

/// Display attribute used when the descriptor does not name one.
pub const DEFAULT_DISPLAY_ATTRIBUTE: &str = "word";

/// Prefix stripped from movie paths when resolving local media files.
const MEDIA_PATH_PREFIX: &str = "media/";

fn default_display_attribute() -> String {
    DEFAULT_DISPLAY_ATTRIBUTE.to_string()
}

/// Location and formats of the movie backing a descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInfo {
    /// Directory of the media, relative to the media root
    pub path: String,
    /// Base file name of the media (also the player title)
    pub movie_loc: String,
    /// Comma-separated list of supplied formats (e.g. "m4v")
    #[serde(default)]
    pub supplied: String,
    /// Key of the line this movie was selected for, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_key: Option<String>,
}

impl MovieInfo {
    /// Supplied formats, trimmed and without empty entries.
    pub fn formats(&self) -> Vec<&str> {
        self.supplied
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Divs {
    annotation: Vec<AnnotationLine>,
}

/// Wire shape of a descriptor file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default = "default_display_attribute")]
    display_attribute: String,
    #[serde(
        default,
        deserialize_with = "de::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    corpus_id: Option<String>,
    #[serde(deserialize_with = "de::line_index")]
    start_at: usize,
    #[serde(deserialize_with = "de::line_index")]
    end_at: usize,
    #[serde(deserialize_with = "de::line_index")]
    min_start: usize,
    #[serde(deserialize_with = "de::line_index")]
    max_end: usize,
    #[serde(deserialize_with = "de::line_index")]
    last_line: usize,
    mov: MovieInfo,
    divs: Divs,
}

/// Everything needed to play one media unit against its transcript.
///
/// `[min_start, max_end]` is the full allowed line range and
/// `[start_at, end_at]` the window the caller asked for. Descriptors are
/// compared by value: replacing a descriptor with an equal one is a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDescriptor", into = "RawDescriptor")]
pub struct MediaDescriptor {
    pub title: Option<String>,
    pub display_attribute: String,
    pub corpus_id: Option<String>,
    pub start_at: usize,
    pub end_at: usize,
    pub min_start: usize,
    pub max_end: usize,
    /// Upper end of the range control
    pub last_line: usize,
    pub movie: MovieInfo,
    pub transcript: Transcript,
}

impl TryFrom<RawDescriptor> for MediaDescriptor {
    type Error = TranscriptError;

    fn try_from(raw: RawDescriptor) -> Result<Self, Self::Error> {
        let descriptor = Self {
            title: raw.title,
            display_attribute: raw.display_attribute,
            corpus_id: raw.corpus_id,
            start_at: raw.start_at,
            end_at: raw.end_at,
            min_start: raw.min_start,
            max_end: raw.max_end,
            last_line: raw.last_line,
            movie: raw.mov,
            transcript: Transcript::new(raw.divs.annotation),
        };
        descriptor.validate()?;
        Ok(descriptor)
    }
}

impl From<MediaDescriptor> for RawDescriptor {
    fn from(descriptor: MediaDescriptor) -> Self {
        Self {
            title: descriptor.title,
            display_attribute: descriptor.display_attribute,
            corpus_id: descriptor.corpus_id,
            start_at: descriptor.start_at,
            end_at: descriptor.end_at,
            min_start: descriptor.min_start,
            max_end: descriptor.max_end,
            last_line: descriptor.last_line,
            mov: descriptor.movie,
            divs: Divs {
                annotation: descriptor.transcript.into_lines(),
            },
        }
    }
}

impl MediaDescriptor {
    /// Load and validate a descriptor from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TranscriptError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| TranscriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate a descriptor from JSON text.
    pub fn from_json(json: &str) -> Result<Self, TranscriptError> {
        let raw: RawDescriptor = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Check every line-index and timecode contract the sync core relies on.
    ///
    /// A descriptor that passes can be handed to a session without any
    /// line lookup going out of bounds.
    pub fn validate(&self) -> Result<(), TranscriptError> {
        self.transcript.validate()?;

        let ordered = self.min_start <= self.start_at
            && self.start_at <= self.end_at
            && self.end_at <= self.max_end;
        if !ordered {
            return Err(TranscriptError::InvalidBounds {
                min_start: self.min_start,
                start_at: self.start_at,
                end_at: self.end_at,
                max_end: self.max_end,
            });
        }

        let len = self.transcript.len();
        if self.max_end >= len {
            return Err(TranscriptError::LineOutOfRange {
                line: self.max_end,
                len,
            });
        }

        // The range control spans [0, last_line] and must hold every window.
        if self.last_line < self.max_end || self.last_line >= len {
            return Err(TranscriptError::InvalidLastLine {
                last_line: self.last_line,
                max_end: self.max_end,
                len,
            });
        }

        Ok(())
    }

    /// Full allowed line range.
    pub fn bounds(&self) -> LineBounds {
        LineBounds::new(self.min_start, self.max_end)
    }

    /// Title shown while the main player owns the view.
    pub fn player_title(&self) -> &str {
        &self.movie.movie_loc
    }

    /// Resolve one media source per supplied format.
    ///
    /// Falls back to the media type's native format when the descriptor
    /// does not list any.
    pub fn sources(&self, root: &Path, media_type: MediaType) -> Vec<MediaSource> {
        let relative = self
            .movie
            .path
            .strip_prefix(MEDIA_PATH_PREFIX)
            .unwrap_or(&self.movie.path);
        let file_name = format!("{}.{}", self.movie.movie_loc, media_type.extension());
        let location = root
            .join(relative)
            .join(media_type.directory())
            .join(file_name);

        let formats = self.movie.formats();
        if formats.is_empty() {
            return vec![MediaSource::new(media_type.default_format(), location)];
        }
        formats
            .into_iter()
            .map(|format| MediaSource::new(format, location.clone()))
            .collect()
    }
}
