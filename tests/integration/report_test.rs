//! Tests for the plain-text session report

use autocue::player::RecordingPlayer;
use autocue::report::{highlight_table, summary, tick_row};
use autocue::sync::{SessionOptions, SyncSession};

use crate::helpers::load_fixture;

fn scenario() -> SyncSession<RecordingPlayer> {
    SyncSession::mount(
        load_fixture("scenario.json"),
        SessionOptions::default(),
        RecordingPlayer::new(),
    )
}

#[test]
fn snapshot_scenario_after_first_crossing() {
    let mut session = scenario();
    session.on_time_update(2.5);

    let report = format!("{}\n\n{}", summary(&session), highlight_table(&session));
    insta::assert_snapshot!("scenario_after_first_crossing", report);
}

#[test]
fn overrun_row_lists_rewind_commands() {
    let player = RecordingPlayer::new();
    let log = player.log();
    let mut session = SyncSession::mount(load_fixture("scenario.json"), SessionOptions::default(), player);
    log.take();

    let outcome = session.on_time_update(9.1);
    let row = tick_row(9.1, &outcome, session.current_line(), &log.take());

    assert!(row.contains("overrun, rewind to 0.000"));
    assert!(row.ends_with("line 0     play @ 0.000, pause"));
}
