//! Game session: one human against the computer opponent.
//!
//! All per-session state lives in [`GameSession`]: the board, which mark
//! each side plays, the opponent and its difficulty, the current phase and
//! the scoreboard. Presentation layers hold a session and drive it through
//! its methods; nothing here touches the terminal.

use crate::games::tictactoe::{
    Board, Difficulty, Mark, Opponent, Outcome, Position, Square, has_won, is_draw, outcome,
};
use crate::scoreboard::Scoreboard;
use crate::settings::Settings;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// How a finished game ended, from the human's side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// The human completed a line.
    HumanWin,
    /// The computer completed a line.
    ComputerWin,
    /// The board filled with no line.
    Draw,
}

impl GameResult {
    /// Result banner text.
    pub fn message(self) -> &'static str {
        match self {
            Self::HumanWin => "You Win!",
            Self::ComputerWin => "AI Wins!",
            Self::Draw => "Draw!",
        }
    }
}

/// Where the session is in the turn cycle.
///
/// The human always moves first. `AwaitingComputer` only exists inside
/// [`GameSession::play`]: the computer answers before `play` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human to pick a cell.
    AwaitingHuman,
    /// The computer is choosing its reply.
    AwaitingComputer,
    /// The game is decided; only a restart continues play.
    GameOver(GameResult),
}

impl Phase {
    /// Returns true once the game is decided.
    pub fn is_over(self) -> bool {
        matches!(self, Phase::GameOver(_))
    }
}

/// What went wrong with a session request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SessionErrorKind {
    /// The chosen cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),
    /// The game has ended.
    #[display("Game is already over")]
    GameOver,
    /// The opponent found no empty cell to play.
    #[display("No move available for the computer")]
    NoMoveAvailable,
}

/// Session error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Session error: {} at {}:{}", kind, file, line)]
pub struct SessionError {
    /// What went wrong.
    pub kind: SessionErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SessionError {
    /// Creates a new session error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: SessionErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A human-versus-computer game plus everything that outlives one game.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    human: Mark,
    opponent: Opponent,
    phase: Phase,
    scoreboard: Scoreboard,
    last_computer_move: Option<Position>,
}

impl GameSession {
    /// Creates a session with an OS-seeded opponent.
    #[instrument]
    pub fn new(human: Mark, difficulty: Difficulty) -> Self {
        Self::with_opponent(human, Opponent::new(difficulty))
    }

    /// Creates a session around an existing opponent.
    #[instrument(skip(opponent), fields(difficulty = %opponent.difficulty()))]
    pub fn with_opponent(human: Mark, opponent: Opponent) -> Self {
        info!(%human, computer = %human.opponent(), "Creating game session");
        Self {
            board: Board::new(),
            human,
            opponent,
            phase: Phase::AwaitingHuman,
            scoreboard: Scoreboard::new(),
            last_computer_move: None,
        }
    }

    /// Creates a session from loaded settings.
    #[instrument]
    pub fn from_settings(settings: &Settings) -> Self {
        let opponent = match settings.seed() {
            Some(seed) => Opponent::seeded(*settings.difficulty(), *seed),
            None => Opponent::new(*settings.difficulty()),
        };
        Self::with_opponent(*settings.human_mark(), opponent)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the human's mark.
    pub fn human(&self) -> Mark {
        self.human
    }

    /// Returns the computer's mark.
    pub fn computer(&self) -> Mark {
        self.human.opponent()
    }

    /// Returns the current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.opponent.difficulty()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns the computer's most recent reply in the current game.
    pub fn last_computer_move(&self) -> Option<Position> {
        self.last_computer_move
    }

    /// Classifies the current board.
    pub fn outcome(&self) -> Outcome {
        outcome(&self.board)
    }

    /// Result banner for a finished game.
    pub fn message(&self) -> Option<&'static str> {
        match self.phase {
            Phase::GameOver(result) => Some(result.message()),
            Phase::AwaitingHuman | Phase::AwaitingComputer => None,
        }
    }

    /// Plays the human's mark at `pos`, then lets the computer answer.
    ///
    /// Returns the phase the session ends up in: `AwaitingHuman` if play
    /// continues, or `GameOver` if either move decided the game. The
    /// scoreboard is updated when the game ends.
    ///
    /// # Errors
    ///
    /// - `GameOver` if the game is already decided.
    /// - `CellOccupied` if `pos` already holds a mark.
    #[instrument(skip(self), fields(human = %self.human, phase = ?self.phase))]
    pub fn play(&mut self, pos: Position) -> Result<Phase, SessionError> {
        if self.phase.is_over() {
            warn!(position = %pos, "Move after game over");
            return Err(SessionError::new(SessionErrorKind::GameOver));
        }

        if !self.board.is_empty(pos) {
            warn!(position = %pos, "Cell already occupied");
            return Err(SessionError::new(SessionErrorKind::CellOccupied(pos)));
        }

        self.board.set(pos, Square::Occupied(self.human));
        self.last_computer_move = None;
        debug!(position = %pos, "Human moved");

        if let Some(result) = self.evaluate() {
            return Ok(self.finish(result));
        }

        self.phase = Phase::AwaitingComputer;
        let computer = self.computer();
        let Some(reply) = self.opponent.select_move(&self.board, computer, self.human) else {
            self.phase = Phase::AwaitingHuman;
            return Err(SessionError::new(SessionErrorKind::NoMoveAvailable));
        };

        self.board.set(reply, Square::Occupied(computer));
        self.last_computer_move = Some(reply);
        info!(position = %reply, difficulty = %self.difficulty(), "Computer moved");

        if let Some(result) = self.evaluate() {
            return Ok(self.finish(result));
        }

        self.phase = Phase::AwaitingHuman;
        Ok(self.phase)
    }

    /// Clears the board for a new game; the scoreboard is kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.board = Board::new();
        self.phase = Phase::AwaitingHuman;
        self.last_computer_move = None;
    }

    /// Restarts and zeroes the scoreboard.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        self.restart();
        self.scoreboard.reset();
    }

    /// Switches the human to `mark`; the computer takes the other one.
    ///
    /// Marks already on the board would change owner, so a game in
    /// progress (or a finished one still on screen) restarts.
    #[instrument(skip(self))]
    pub fn set_human_mark(&mut self, mark: Mark) {
        if mark == self.human {
            return;
        }
        info!(human = %mark, computer = %mark.opponent(), "Symbols changed");
        self.human = mark;
        if !self.board.is_blank() {
            self.restart();
        }
    }

    /// Changes the difficulty; the next computer move uses it.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.opponent.set_difficulty(difficulty);
    }

    // Only the side that just moved can have won, but checking both keeps
    // this independent of whose turn it was.
    fn evaluate(&self) -> Option<GameResult> {
        if has_won(&self.board, self.human) {
            Some(GameResult::HumanWin)
        } else if has_won(&self.board, self.computer()) {
            Some(GameResult::ComputerWin)
        } else if is_draw(&self.board) {
            Some(GameResult::Draw)
        } else {
            None
        }
    }

    fn finish(&mut self, result: GameResult) -> Phase {
        info!(?result, "Game over");
        self.phase = Phase::GameOver(result);
        self.scoreboard.record(result);
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hard_session() -> GameSession {
        GameSession::with_opponent(Mark::X, Opponent::seeded(Difficulty::Hard, 0))
    }

    #[test]
    fn test_human_move_gets_a_reply() {
        let mut session = hard_session();
        let phase = session.play(Position::Center).unwrap();
        assert_eq!(phase, Phase::AwaitingHuman);
        assert_eq!(session.board().count(Mark::X), 1);
        assert_eq!(session.board().count(Mark::O), 1);
        assert!(session.last_computer_move().is_some());
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut session = hard_session();
        session.play(Position::Center).unwrap();
        let err = session.play(Position::Center).unwrap_err();
        assert_eq!(err.kind, SessionErrorKind::CellOccupied(Position::Center));
        assert_eq!(session.board().count(Mark::X), 1);
    }

    #[test]
    fn test_error_display_mentions_cell() {
        let err = SessionError::new(SessionErrorKind::CellOccupied(Position::TopLeft));
        assert!(err.to_string().contains("Top-left is already occupied"));
    }
}
