//! Legal move enumeration.

use super::super::{Board, Position};

/// Returns every empty position in row-major order.
///
/// The order is fixed: the hard opponent keeps the first best cell it
/// finds, so its choice is reproducible only if this order is.
pub fn empty_cells(board: &Board) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect()
}
