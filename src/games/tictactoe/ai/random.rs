//! Uniform random move choice for the easy opponent.

use super::super::rules::empty_cells;
use super::super::{Board, Position};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Picks one empty cell uniformly at random.
///
/// Returns `None` when the board has no empty cell.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let cells = empty_cells(board);
    let choice = cells.choose(rng).copied();
    debug!(choices = cells.len(), position = ?choice, "Random move");
    choice
}
