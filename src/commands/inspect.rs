//! Inspect command handler

use anyhow::Result;

use autocue::player::RecordingPlayer;
use autocue::report::{format_commands, highlight_table, summary, tick_row};
use autocue::tui::current_theme;
use autocue::{Config, SyncSession};

use super::load_descriptor;
use crate::cli::InspectArgs;

/// Print the session summary, tick trace and highlight table.
pub fn handle(args: &InspectArgs, config: &Config) -> Result<()> {
    let descriptor = load_descriptor(&args.session.file)?;
    let mut options = config.session_options();
    args.session.apply(&mut options);

    let player = RecordingPlayer::new();
    let log = player.log();
    let mut session = SyncSession::mount(descriptor, options, player);
    let theme = current_theme();

    println!("{}", summary(&session));
    println!("mount   {}", format_commands(&log.take()));

    if !args.ticks.is_empty() {
        println!();
        println!("{}", theme.accent_text("ticks"));
        for &time in &args.ticks {
            let outcome = session.on_time_update(time);
            println!(
                "{}",
                tick_row(time, &outcome, session.current_line(), &log.take())
            );
        }
    }

    println!();
    println!("{}", theme.accent_text("lines"));
    println!("{}", highlight_table(&session));
    Ok(())
}
