//! Autocue - keeps a time-aligned transcript in sync with media playback
//!
//! The core lives in [`sync`]: it maps player time onto transcript lines,
//! owns the selected line window and never lets playback leave it. The
//! player itself sits behind the [`player::MediaPlayer`] trait.

pub mod config;
pub mod logging;
pub mod player;
pub mod report;
pub mod sync;
pub mod transcript;
pub mod tui;

pub use config::Config;
pub use player::{MediaPlayer, PlayerCommand};
pub use sync::{SessionOptions, SyncSession};
pub use transcript::{MediaDescriptor, TranscriptError};
