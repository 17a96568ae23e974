//! Plain-text reports of a session, used by `autocue inspect`.

use unicode_width::UnicodeWidthStr;

use crate::player::{MediaPlayer, PlayerCommand};
use crate::sync::{SyncSession, TickOutcome};

/// Header block: title, movie, line bounds and the active window.
pub fn summary<P: MediaPlayer>(session: &SyncSession<P>) -> String {
    let descriptor = session.descriptor();
    let bounds = descriptor.bounds();
    let engine = session.engine();

    [
        format!("title   {}", descriptor.title.as_deref().unwrap_or("-")),
        format!("movie   {}", descriptor.movie.movie_loc),
        format!(
            "lines   {} (allowed {}-{}, requested {}-{})",
            descriptor.transcript.len(),
            bounds.min_start,
            bounds.max_end,
            descriptor.start_at,
            descriptor.end_at
        ),
        format!(
            "window  {}  {:.3}s - {:.3}s",
            session.window(),
            engine.start_time(),
            engine.end_time()
        ),
    ]
    .join("\n")
}

/// One row per transcript line, prefixed with its highlight code.
///
/// Codes: `>` active, `|` in window, `.` dimmed border, blank hidden.
pub fn highlight_table<P: MediaPlayer>(session: &SyncSession<P>) -> String {
    let descriptor = session.descriptor();
    let speaker_width = descriptor
        .transcript
        .iter()
        .map(|line| line.speaker.width())
        .max()
        .unwrap_or(0);

    session
        .highlights()
        .into_iter()
        .zip(descriptor.transcript.iter())
        .enumerate()
        .map(|(index, (highlight, line))| {
            let speaker = format!(
                "{}{}",
                line.speaker,
                " ".repeat(speaker_width - line.speaker.width())
            );
            let row = format!(
                "{} {:>3}  {:>7.3} {:>7.3}  {}  {}",
                highlight.code(),
                index,
                line.from,
                line.to,
                speaker,
                line.text(&descriptor.display_attribute)
            );
            row.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a list of player commands as `a, b, c` (or `-` when empty).
pub fn format_commands(commands: &[PlayerCommand]) -> String {
    if commands.is_empty() {
        return "-".to_string();
    }
    commands
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One line of tick trace output.
pub fn tick_row(time: f64, outcome: &TickOutcome, current_line: usize, commands: &[PlayerCommand]) -> String {
    format!(
        "t={:>8.3}  {:<24}  line {:<4}  {}",
        time,
        outcome.to_string(),
        current_line,
        format_commands(commands)
    )
    .trim_end()
    .to_string()
}
