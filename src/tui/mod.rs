//! Terminal view for autocue
//!
//! Renders the transcript with the active line highlighted, the range bar
//! and a status line using ratatui/crossterm. Time comes from a
//! [`SimulatedPlayer`](crate::player::SimulatedPlayer) polled on every tick.

pub mod autocue_app;
pub mod footer;
pub mod input;
pub mod render;
pub mod theme;
pub mod ui;

pub use autocue_app::{run, AutocueApp};
pub use input::{map_key, Action};
pub use theme::{current_theme, Theme};
