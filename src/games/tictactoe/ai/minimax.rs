//! Exhaustive adversarial search for the hard opponent.

use super::super::rules::{empty_cells, has_won, is_draw};
use super::super::{Board, Mark, Position};
use tracing::{debug, instrument};

/// Value of a position the computer has won.
pub const WIN: i8 = 1;
/// Value of a drawn position.
pub const DRAW: i8 = 0;
/// Value of a position the human has won.
pub const LOSS: i8 = -1;

/// Game-theoretic value of `board` from the computer's point of view.
///
/// Both sides are assumed to play perfectly from here on. The computer
/// maximizes, the human minimizes; `computer_to_move` says who is next.
#[instrument(skip(board), fields(board = %board))]
pub fn game_value(board: &Board, computer: Mark, human: Mark, computer_to_move: bool) -> i8 {
    search(board, computer, human, computer_to_move)
}

// Terminal checks run before any further placement, so depth never
// exceeds the number of empty cells.
fn search(board: &Board, computer: Mark, human: Mark, maximizing: bool) -> i8 {
    if has_won(board, computer) {
        return WIN;
    }
    if has_won(board, human) {
        return LOSS;
    }
    if is_draw(board) {
        return DRAW;
    }

    let mover = if maximizing { computer } else { human };
    let values = empty_cells(board)
        .into_iter()
        .map(|pos| search(&board.with(pos, mover), computer, human, !maximizing));

    let best = if maximizing { values.max() } else { values.min() };
    // Not full, so at least one child exists.
    best.unwrap_or(DRAW)
}

/// Returns the first empty cell (row-major) that completes a line for `mark`.
pub fn winning_move(board: &Board, mark: Mark) -> Option<Position> {
    empty_cells(board)
        .into_iter()
        .find(|&pos| has_won(&board.with(pos, mark), mark))
}

/// Picks the computer's move by exhaustive minimax.
///
/// An immediate win is taken first. Otherwise every empty cell is scored
/// with the human to reply, and the first cell whose value strictly beats
/// the best so far is kept, so equal values resolve to the earliest cell
/// in row-major order. Returns `None` when the board has no empty cell.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, computer: Mark, human: Mark) -> Option<Position> {
    debug_assert_ne!(computer, human, "marks must differ");

    if let Some(pos) = winning_move(board, computer) {
        debug!(position = %pos, "Taking immediate win");
        return Some(pos);
    }

    let mut best: Option<(Position, i8)> = None;
    for pos in empty_cells(board) {
        let value = search(&board.with(pos, computer), computer, human, false);
        debug!(position = %pos, value, "Scored candidate");
        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((pos, value));
        }
    }

    if let Some((pos, value)) = best {
        debug!(position = %pos, value, "Selected move");
    }
    best.map(|(pos, _)| pos)
}
