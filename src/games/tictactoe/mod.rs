//! Classic 3x3 tic-tac-toe: board, rules and the computer opponent.

pub mod ai;
mod position;
pub mod rules;
mod types;

pub use ai::{Difficulty, Opponent, select_move};
pub use position::Position;
pub use rules::{empty_cells, has_won, is_draw, outcome, winner};
pub use types::{Board, BoardParseError, Mark, Outcome, Square};

/// A move is a position on the board.
pub type Move = Position;
