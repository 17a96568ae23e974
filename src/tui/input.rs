//! Key handling for the autocue view.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TogglePause,
    /// Move the window start handle by a number of lines
    NudgeStart(isize),
    /// Move the window end handle by a number of lines
    NudgeEnd(isize),
    MoveCursor(isize),
    ToggleInspect,
    SpeedUp,
    SpeedDown,
    ToggleHelp,
    /// Close the topmost overlay
    Close,
    Quit,
}

/// Overlays currently on screen, topmost first when mapping `Esc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlays {
    pub help: bool,
    pub inspect: bool,
}

impl Overlays {
    fn any(&self) -> bool {
        self.help || self.inspect
    }
}

/// Map a key press to an action.
///
/// `Esc` closes an open overlay before it quits. While help is showing,
/// every key other than quit keys just closes it.
pub fn map_key(key: KeyEvent, overlays: Overlays) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if overlays.help {
        return match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            _ => Some(Action::Close),
        };
    }

    match key.code {
        KeyCode::Char(' ') => Some(Action::TogglePause),
        KeyCode::Char('[') => Some(Action::NudgeStart(-1)),
        KeyCode::Char(']') => Some(Action::NudgeStart(1)),
        KeyCode::Char('{') => Some(Action::NudgeEnd(-1)),
        KeyCode::Char('}') => Some(Action::NudgeEnd(1)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveCursor(-1)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveCursor(1)),
        KeyCode::PageUp => Some(Action::MoveCursor(-10)),
        KeyCode::PageDown => Some(Action::MoveCursor(10)),
        KeyCode::Char('i') | KeyCode::Enter => Some(Action::ToggleInspect),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::SpeedUp),
        KeyCode::Char('-') => Some(Action::SpeedDown),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Esc if overlays.any() => Some(Action::Close),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Move a line cursor, staying within `0..len`.
pub fn move_cursor(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    cursor.saturating_add_signed(delta).min(len - 1)
}
