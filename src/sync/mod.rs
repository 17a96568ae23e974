//! Playback-to-transcript synchronization
//!
//! Keeps three things consistent while media plays: the player's time, the
//! selected line window and the highlighted line. Playback never leaves the
//! selected window.
//!
//! # Architecture
//!
//! - `window`: line windows and their derivation from a descriptor
//! - `range`: the dual-handle range control that owns the window
//! - `engine`: maps time updates onto the active line, enforces the window end
//! - `highlight`: pure per-line classification for the view
//! - `session`: event glue binding the above to a [`MediaPlayer`]
//!
//! # Usage
//!
//! ```no_run
//! use autocue::player::RecordingPlayer;
//! use autocue::sync::{SessionOptions, SyncSession};
//! use autocue::transcript::MediaDescriptor;
//!
//! let descriptor = MediaDescriptor::load("kristiansand_01.json").unwrap();
//! let mut session = SyncSession::mount(descriptor, SessionOptions::default(), RecordingPlayer::new());
//! session.on_time_update(2.5);
//! println!("active line: {}", session.current_line());
//! ```
//!
//! [`MediaPlayer`]: crate::player::MediaPlayer

mod engine;
mod highlight;
mod range;
mod session;
mod window;

pub use engine::{EngineStatus, SyncEngine, TickOutcome};
pub use highlight::{
    classify, classify_all, BorderAnchors, BorderPolicy, LineHighlight, ParseBorderPolicyError,
};
pub use range::{DragOutcome, RangeController, SliderValues};
pub use session::{SessionOptions, SyncSession};
pub use window::{compute_initial_window, ContextLines, LineBounds, ParseContextLinesError, Window};
