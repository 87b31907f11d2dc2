//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};

/// Checks if the board is full (all squares occupied).
///
/// This does not look at lines: a full board with a completed line is
/// still "full". Callers classify a game by checking both marks with
/// [`has_won`](super::has_won) before trusting a draw.
pub fn is_draw(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
