//! Tic-tac-toe against a computer opponent.
//!
//! # Architecture
//!
//! - **Rules**: pure board evaluation (win, draw, empty cells)
//! - **AI**: move selection, random (easy) or exhaustive minimax (hard)
//! - **Session**: one human-versus-computer game plus the scoreboard
//! - **TUI**: terminal front end built on ratatui
//!
//! # Example
//!
//! ```
//! use tictactoe_ai::{Board, Mark, Position, ai};
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! let reply = ai::best_move(&board, Mark::O, Mark::X);
//! assert_eq!(reply, Some(Position::MiddleRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod scoreboard;
mod session;
mod settings;
mod tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, Difficulty, Mark, Move, Opponent, Outcome, Position, Square, ai,
    empty_cells, has_won, is_draw, outcome, rules, select_move, winner,
};

// Crate-level exports - Session management
pub use scoreboard::Scoreboard;
pub use session::{GameResult, GameSession, Phase, SessionError, SessionErrorKind};

// Crate-level exports - Configuration
pub use settings::{ConfigError, DEFAULT_CONFIG_FILE, Settings};

// Crate-level exports - Terminal UI
pub use tui::{Action, App, run_tui};
