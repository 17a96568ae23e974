//! Media player boundary
//!
//! The sync core never plays media itself. It issues [`PlayerCommand`]s to
//! something implementing [`MediaPlayer`] and is fed time updates back.
//!
//! - `simulated`: clock-driven player used by the terminal autocue
//! - `recording`: command log used by `autocue inspect` and tests

mod recording;
mod simulated;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use recording::{CommandLog, RecordingPlayer};
pub use simulated::SimulatedPlayer;

/// Kind of media being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Audio,
    #[default]
    Video,
}

impl MediaType {
    /// Directory holding this media type under a movie path.
    pub fn directory(&self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }

    /// File extension of the media files.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Audio => "mp3",
            Self::Video => "mp4",
        }
    }

    /// Format assumed when a descriptor does not list any.
    pub fn default_format(&self) -> &'static str {
        match self {
            Self::Audio => "mp3",
            Self::Video => "m4v",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.directory())
    }
}

/// Error parsing a [`MediaType`] value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid media type '{0}': expected 'audio' or 'video'")]
pub struct ParseMediaTypeError(String);

impl FromStr for MediaType {
    type Err = ParseMediaTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "audio" => Ok(Self::Audio),
            "video" => Ok(Self::Video),
            _ => Err(ParseMediaTypeError(s.to_string())),
        }
    }
}

/// One playable rendition of a movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSource {
    /// Player format key (e.g. "m4v", "mp3")
    pub format: String,
    pub location: PathBuf,
}

impl MediaSource {
    pub fn new(format: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            format: format.into(),
            location: location.into(),
        }
    }
}

/// Command sent from the sync core to the player.
///
/// There is no separate seek: "seek to t and play" is `Play { at: t }`, and
/// "seek to t and hold" is `Play { at: t }` followed by `Pause`.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    SetMedia(Vec<MediaSource>),
    Play { at: f64 },
    Pause,
    Stop,
    Destroy,
}

impl fmt::Display for PlayerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetMedia(sources) => write!(f, "set-media ({} source(s))", sources.len()),
            Self::Play { at } => write!(f, "play @ {:.3}", at),
            Self::Pause => write!(f, "pause"),
            Self::Stop => write!(f, "stop"),
            Self::Destroy => write!(f, "destroy"),
        }
    }
}

/// External media playback engine.
///
/// Implementations are best effort: the sync core issues commands and does
/// not wait for or retry them. Time updates flow back through
/// [`SyncSession::on_time_update`](crate::sync::SyncSession::on_time_update).
pub trait MediaPlayer {
    fn set_media(&mut self, sources: &[MediaSource]);

    /// Seek to `at` seconds and start playing.
    fn play(&mut self, at: f64);

    fn pause(&mut self);

    fn stop(&mut self);

    /// Release the player. No time updates may follow.
    fn destroy(&mut self);

    /// Dispatch a command to the matching method.
    fn apply(&mut self, command: &PlayerCommand) {
        match command {
            PlayerCommand::SetMedia(sources) => self.set_media(sources),
            PlayerCommand::Play { at } => self.play(*at),
            PlayerCommand::Pause => self.pause(),
            PlayerCommand::Stop => self.stop(),
            PlayerCommand::Destroy => self.destroy(),
        }
    }

    /// Dispatch several commands in order.
    fn apply_all(&mut self, commands: &[PlayerCommand]) {
        for command in commands {
            self.apply(command);
        }
    }
}
