//! Play command handler

use std::time::Duration;

use anyhow::Result;
use tracing::info;

use autocue::player::SimulatedPlayer;
use autocue::{Config, SyncSession};

use super::load_descriptor;
use crate::cli::PlayArgs;

/// Open the terminal autocue for a descriptor.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &PlayArgs, config: &Config) -> Result<()> {
    let descriptor = load_descriptor(&args.session.file)?;
    let mut options = config.session_options();
    args.session.apply(&mut options);

    let speed = args.speed.unwrap_or(config.playback.speed);
    let tick = Duration::from_millis(config.playback.tick_interval_ms);
    info!(file = %args.session.file.display(), speed, ?tick, "play");

    let session = SyncSession::mount(descriptor, options, SimulatedPlayer::new(speed));
    autocue::tui::run(session, tick)
}
