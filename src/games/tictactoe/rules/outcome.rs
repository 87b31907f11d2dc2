//! Board classification.

use super::super::{Board, Mark, Outcome};
use super::{has_won, is_draw};
use tracing::instrument;

/// Classifies a board.
///
/// Wins are checked before fullness, so a full board with a completed
/// line is a win, not a draw.
#[instrument]
pub fn outcome(board: &Board) -> Outcome {
    if has_won(board, Mark::X) {
        Outcome::Won(Mark::X)
    } else if has_won(board, Mark::O) {
        Outcome::Won(Mark::O)
    } else if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
