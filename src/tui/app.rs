//! Application state and logic.

use super::input::{Action, move_cursor};
use crate::games::tictactoe::Position;
use crate::session::{GameSession, Phase, SessionErrorKind};
use tracing::{debug, instrument};

/// Main application state: the session plus what only the screen needs.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a session.
    pub fn new(session: GameSession) -> Self {
        let status_message = format!(
            "You are {}, AI is {}. Your move.",
            session.human(),
            session.computer()
        );
        Self {
            session,
            cursor: Position::Center,
            status_message,
            should_quit: false,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a user action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::MoveCursor(key) => {
                self.cursor = move_cursor(self.cursor, key);
            }
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::Place(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Action::Restart => {
                self.session.restart();
                self.status_message = "New game. Your move.".to_string();
            }
            Action::ResetAll => {
                self.session.reset_all();
                self.status_message = "Scores cleared. New game, your move.".to_string();
            }
            Action::ToggleSymbol => {
                let mark = self.session.human().opponent();
                self.session.set_human_mark(mark);
                self.status_message = format!(
                    "You are now {}, AI is {}. Your move.",
                    self.session.human(),
                    self.session.computer()
                );
            }
            Action::ToggleDifficulty => {
                let difficulty = self.session.difficulty().toggle();
                self.session.set_difficulty(difficulty);
                self.status_message = format!("AI difficulty: {}.", difficulty.label());
            }
            Action::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn place(&mut self, pos: Position) {
        match self.session.play(pos) {
            Ok(Phase::GameOver(result)) => {
                self.status_message =
                    format!("{} Press r to play again.", result.message());
            }
            Ok(_) => {
                self.status_message = match self.session.last_computer_move() {
                    Some(reply) => format!("AI played {}. Your move.", reply),
                    None => "Your move.".to_string(),
                };
            }
            Err(e) => {
                self.status_message = match e.kind {
                    SessionErrorKind::CellOccupied(pos) => format!("{} is taken.", pos),
                    SessionErrorKind::GameOver => {
                        "Game over. Press r to play again.".to_string()
                    }
                    SessionErrorKind::NoMoveAvailable => e.kind.to_string(),
                };
            }
        }
    }
}
