//! End-to-end synchronization tests against a recording player

use autocue::player::{MediaSource, PlayerCommand, RecordingPlayer};
use autocue::sync::{
    BorderPolicy, ContextLines, DragOutcome, EngineStatus, LineHighlight, SessionOptions,
    SliderValues, SyncSession, TickOutcome, Window,
};

use crate::helpers::load_fixture;

fn mount(name: &str, options: SessionOptions) -> (SyncSession<RecordingPlayer>, autocue::player::CommandLog) {
    let player = RecordingPlayer::new();
    let log = player.log();
    let session = SyncSession::mount(load_fixture(name), options, player);
    (session, log)
}

// ============================================================================
// Scenario: three lines, window [0, 2]
// ============================================================================

#[test]
fn mount_loads_media_and_plays_from_window_start() {
    let (session, log) = mount("scenario.json", SessionOptions::default());

    assert_eq!(session.window(), Window::new(0, 2));
    assert_eq!(session.current_line(), 0);
    assert_eq!(session.engine().end_time(), 9.0);
    assert_eq!(session.status(), EngineStatus::Playing);

    let commands = log.take();
    assert_eq!(commands.len(), 2);
    assert_eq!(
        commands[0],
        PlayerCommand::SetMedia(vec![MediaSource::new(
            "m4v",
            "media/ndc/kristiansand/video/kristiansand_01.mp4"
        )])
    );
    assert_eq!(commands[1], PlayerCommand::Play { at: 0.0 });
}

#[test]
fn ticks_advance_then_overrun_rewinds() {
    let (mut session, log) = mount("scenario.json", SessionOptions::default());
    log.take();

    assert_eq!(
        session.on_time_update(2.5),
        TickOutcome::Advanced { from: 0, to: 1 }
    );
    assert_eq!(session.current_line(), 1);
    assert!(log.is_empty());

    let outcome = session.on_time_update(9.1);
    assert!(outcome.is_overrun());
    assert_eq!(session.current_line(), 0);
    assert_eq!(session.status(), EngineStatus::Paused);
    assert_eq!(
        log.take(),
        vec![PlayerCommand::Play { at: 0.0 }, PlayerCommand::Pause]
    );
}

#[test]
fn repeated_overrun_is_idempotent() {
    let (mut session, log) = mount("scenario.json", SessionOptions::default());
    session.on_time_update(9.5);
    let first = (session.current_line(), session.window(), session.status());
    log.take();

    session.on_time_update(12.0);
    assert_eq!((session.current_line(), session.window(), session.status()), first);
    assert_eq!(
        log.take(),
        vec![PlayerCommand::Play { at: 0.0 }, PlayerCommand::Pause]
    );
}

#[test]
fn tick_exactly_on_line_end_does_not_cross() {
    let (mut session, _log) = mount("scenario.json", SessionOptions::default());

    assert_eq!(session.on_time_update(2.0), TickOutcome::Within);
    assert_eq!(session.current_line(), 0);
    assert_eq!(session.on_time_update(9.0), TickOutcome::Advanced { from: 0, to: 1 });
}

// ============================================================================
// Range drags
// ============================================================================

#[test]
fn accepted_drag_stops_and_restarts_in_new_window() {
    let (mut session, log) = mount("scenario.json", SessionOptions::default());
    session.on_time_update(2.5);
    log.take();

    let outcome = session.on_drag(SliderValues::new(1, 3));

    assert_eq!(outcome, DragOutcome::Accepted(Window::new(1, 2)));
    assert_eq!(session.current_line(), 1);
    assert_eq!(session.engine().start_time(), 2.0);
    assert!(!session.range().restart_requested());
    assert_eq!(
        log.take(),
        vec![PlayerCommand::Stop, PlayerCommand::Play { at: 2.0 }]
    );
}

#[test]
fn degenerate_drag_changes_nothing() {
    let (mut session, log) = mount("scenario.json", SessionOptions::default());
    session.on_time_update(2.5);
    log.take();

    assert_eq!(session.on_drag(SliderValues::new(2, 2)), DragOutcome::Rejected);
    assert_eq!(session.on_drag(SliderValues::new(3, 1)), DragOutcome::Rejected);

    assert_eq!(session.window(), Window::new(0, 2));
    assert_eq!(session.current_line(), 1);
    assert!(log.is_empty());
}

#[test]
fn single_line_window_is_draggable() {
    let (mut session, _log) = mount("scenario.json", SessionOptions::default());

    let outcome = session.on_drag(SliderValues::new(2, 3));
    assert_eq!(outcome, DragOutcome::Accepted(Window::single(2)));
    assert_eq!(session.range().slider_values(), SliderValues::new(2, 3));
}

#[test]
fn nudging_end_handle_grows_window() {
    let (mut session, _log) = mount("scenario.json", SessionOptions::default());
    session.on_drag(SliderValues::new(0, 2));
    assert_eq!(session.window(), Window::new(0, 1));

    let proposed = session.range().nudge_end(1);
    assert_eq!(proposed, SliderValues::new(0, 3));
    assert_eq!(session.on_drag(proposed), DragOutcome::Accepted(Window::new(0, 2)));

    // The handle stops at the end of the control.
    assert_eq!(session.range().nudge_end(1), SliderValues::new(0, 3));
}

// ============================================================================
// Context expansion
// ============================================================================

#[test]
fn context_lines_expand_symmetrically() {
    let options = SessionOptions {
        context_lines: ContextLines::Lines(5),
        ..SessionOptions::default()
    };
    let (session, _log) = mount("long.json", options);
    assert_eq!(session.window(), Window::new(35, 55));
}

#[test]
fn context_expansion_clamps_at_bounds() {
    let options = SessionOptions {
        context_lines: ContextLines::Lines(70),
        ..SessionOptions::default()
    };
    let (session, _log) = mount("long.json", options);
    assert_eq!(session.window(), Window::new(0, 100));
}

#[test]
fn all_context_selects_full_bounds() {
    let options = SessionOptions {
        context_lines: ContextLines::All,
        ..SessionOptions::default()
    };
    let (session, _log) = mount("long.json", options);
    assert_eq!(session.window(), Window::new(0, 100));
}

// ============================================================================
// Border policy
// ============================================================================

#[test]
fn initial_policy_keeps_original_edges_dimmed() {
    let options = SessionOptions {
        border_policy: BorderPolicy::Initial,
        ..SessionOptions::default()
    };
    let (mut session, _log) = mount("long.json", options);
    assert_eq!(session.window(), Window::new(40, 50));

    session.on_drag(SliderValues::new(45, 48));

    assert_eq!(session.highlight(40), LineHighlight::Dimmed);
    assert_eq!(session.highlight(50), LineHighlight::Dimmed);
    assert_eq!(session.highlight(41), LineHighlight::Hidden);
    assert_eq!(session.highlight(45), LineHighlight::Active);
    assert_eq!(session.highlight(47), LineHighlight::InWindow);
}

#[test]
fn default_policy_tracks_dragged_window() {
    let (mut session, _log) = mount("long.json", SessionOptions::default());
    assert_eq!(session.options().border_policy, BorderPolicy::Live);

    session.on_drag(SliderValues::new(45, 48));

    assert_eq!(session.highlight(40), LineHighlight::Hidden);
    assert_eq!(session.highlight(50), LineHighlight::Hidden);
    assert_eq!(session.highlight(46), LineHighlight::InWindow);
}

// ============================================================================
// Descriptor replacement and teardown
// ============================================================================

#[test]
fn equal_descriptor_is_ignored() {
    let (mut session, log) = mount("scenario.json", SessionOptions::default());
    log.take();

    assert!(!session.replace_descriptor(load_fixture("scenario.json")));
    assert!(log.is_empty());
}

#[test]
fn new_descriptor_reloads_and_restarts() {
    let (mut session, log) = mount("scenario.json", SessionOptions::default());
    session.toggle_inspection(1);
    log.take();

    assert!(session.replace_descriptor(load_fixture("long.json")));

    assert_eq!(session.window(), Window::new(40, 50));
    assert_eq!(session.current_line(), 40);
    assert_eq!(session.inspecting(), None);

    let commands = log.take();
    assert_eq!(commands.first(), Some(&PlayerCommand::Stop));
    assert!(matches!(commands[1], PlayerCommand::SetMedia(ref sources) if sources.len() == 2));
    assert_eq!(commands.last(), Some(&PlayerCommand::Play { at: 80.0 }));
}

#[test]
fn dropping_session_destroys_player() {
    let (session, log) = mount("scenario.json", SessionOptions::default());
    log.take();

    drop(session);
    assert_eq!(log.take(), vec![PlayerCommand::Destroy]);
}

// ============================================================================
// Inspection overlay
// ============================================================================

#[test]
fn inspection_pauses_and_retitles() {
    let (mut session, log) = mount("scenario.json", SessionOptions::default());
    log.take();
    assert_eq!(session.display_title(), "kristiansand_01");

    assert!(session.toggle_inspection(1));
    assert_eq!(log.take(), vec![PlayerCommand::Pause]);
    assert_eq!(session.status(), EngineStatus::Paused);
    assert_eq!(session.display_title(), "Kristiansand: kaffe");
    assert_eq!(session.inspection_span(), Some((2.0, 5.0)));

    assert!(!session.toggle_inspection(1));
    assert!(log.is_empty());
    assert_eq!(session.display_title(), "kristiansand_01");
}
