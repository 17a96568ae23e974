//! Player that only records the commands it receives.

use std::cell::RefCell;
use std::rc::Rc;

use super::{MediaPlayer, MediaSource, PlayerCommand};

/// Shared handle to a recorded command list.
///
/// Clones share the same list, so a caller can keep a handle after the
/// player has been moved into (and dropped with) a session.
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    commands: Rc<RefCell<Vec<PlayerCommand>>>,
}

impl CommandLog {
    fn push(&self, command: PlayerCommand) {
        self.commands.borrow_mut().push(command);
    }

    /// Copy of every command recorded so far.
    pub fn snapshot(&self) -> Vec<PlayerCommand> {
        self.commands.borrow().clone()
    }

    /// Drain the recorded commands.
    pub fn take(&self) -> Vec<PlayerCommand> {
        std::mem::take(&mut *self.commands.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.commands.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.borrow().is_empty()
    }
}

/// A [`MediaPlayer`] that plays nothing and logs every command.
#[derive(Debug, Clone, Default)]
pub struct RecordingPlayer {
    log: CommandLog,
}

impl RecordingPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the command log.
    pub fn log(&self) -> CommandLog {
        self.log.clone()
    }
}

impl MediaPlayer for RecordingPlayer {
    fn set_media(&mut self, sources: &[MediaSource]) {
        self.log.push(PlayerCommand::SetMedia(sources.to_vec()));
    }

    fn play(&mut self, at: f64) {
        self.log.push(PlayerCommand::Play { at });
    }

    fn pause(&mut self) {
        self.log.push(PlayerCommand::Pause);
    }

    fn stop(&mut self) {
        self.log.push(PlayerCommand::Stop);
    }

    fn destroy(&mut self) {
        self.log.push(PlayerCommand::Destroy);
    }
}
