//! Transcript loading and validation errors.

use std::path::PathBuf;

/// Errors that can occur while loading or validating a transcript.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid transcript JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Transcript has no annotation lines")]
    EmptyTranscript,

    #[error("Line {line} has an empty or inverted time span ({from} -> {to})")]
    InvalidTimespan { line: usize, from: f64, to: f64 },

    #[error(
        "Line bounds must satisfy minStart <= startAt <= endAt <= maxEnd \
         (got {min_start} <= {start_at} <= {end_at} <= {max_end})"
    )]
    InvalidBounds {
        min_start: usize,
        start_at: usize,
        end_at: usize,
        max_end: usize,
    },

    #[error("Line {line} is out of range for a transcript of {len} lines")]
    LineOutOfRange { line: usize, len: usize },

    #[error("lastLine must satisfy maxEnd <= lastLine < {len} (got maxEnd {max_end}, lastLine {last_line})")]
    InvalidLastLine {
        last_line: usize,
        max_end: usize,
        len: usize,
    },
}
