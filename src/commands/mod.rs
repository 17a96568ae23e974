//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod inspect;
pub mod play;

use anyhow::{Context, Result};
use std::path::Path;

use autocue::MediaDescriptor;

/// Load and validate a descriptor file.
pub fn load_descriptor(path: &Path) -> Result<MediaDescriptor> {
    MediaDescriptor::load(path).with_context(|| format!("Failed to load {}", path.display()))
}
