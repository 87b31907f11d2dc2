//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use tracing::instrument;

/// The eight winning lines: rows, columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns true iff some row, column or diagonal consists entirely of `mark`.
pub fn has_won(board: &Board, mark: Mark) -> bool {
    let target = Square::Occupied(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == target))
}

/// Returns the mark owning the first completed line, if any.
///
/// Lines are scanned rows first, then columns, then diagonals. A legal
/// game never has two winners; for a malformed board with both marks
/// completing lines, whichever line comes first is reported.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(mark) => Some(mark),
                Square::Empty => None,
            };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(mark: Mark, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for &pos in positions {
            board.set(pos, Square::Occupied(mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let board = board_with(Mark::X, &line);
            assert!(has_won(&board, Mark::X), "line {:?} should win", line);
            assert!(!has_won(&board, Mark::O));
            assert_eq!(winner(&board), Some(Mark::X));
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(
            Mark::O,
            &[Position::TopLeft, Position::Center, Position::BottomRight],
        );
        assert_eq!(winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Mark::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(winner(&board), None);
        assert!(!has_won(&board, Mark::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Mark::X, &[Position::TopLeft, Position::TopCenter]);
        board.set(Position::TopRight, Square::Occupied(Mark::O));
        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
    }

    #[test]
    fn test_both_marks_can_report_a_line() {
        let mut board = board_with(
            Mark::X,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        for pos in [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ] {
            board.set(pos, Square::Occupied(Mark::O));
        }
        assert!(has_won(&board, Mark::X));
        assert!(has_won(&board, Mark::O));
    }
}
