//! Tests for board positions and the board evaluator.

use tictactoe_ai::{Board, Mark, Position, Square, empty_cells, has_won, is_draw, winner};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_coords_round_trip() {
    for pos in Position::ALL {
        let (row, col) = pos.coords();
        assert_eq!(Position::from_coords(row, col), Some(pos));
    }
}

/// Every board over {empty, X, O}, legal or not.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(|mut code| {
        let mut squares = [Square::Empty; 9];
        for square in &mut squares {
            *square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Mark::X),
                _ => Square::Occupied(Mark::O),
            };
            code /= 3;
        }
        Board::from(squares)
    })
}

/// Line check written against coordinates instead of the rule table.
fn completes_a_line(board: &Board, mark: Mark) -> bool {
    let owns = |row: usize, col: usize| {
        let pos = Position::from_coords(row, col).unwrap();
        board.get(pos) == Square::Occupied(mark)
    };
    let row = (0..3).any(|r| (0..3).all(|c| owns(r, c)));
    let col = (0..3).any(|c| (0..3).all(|r| owns(r, c)));
    let diag = (0..3).all(|i| owns(i, i));
    let anti = (0..3).all(|i| owns(i, 2 - i));
    row || col || diag || anti
}

#[test]
fn test_has_won_matches_lines_on_every_board() {
    for board in all_boards() {
        for mark in [Mark::X, Mark::O] {
            assert_eq!(
                has_won(&board, mark),
                completes_a_line(&board, mark),
                "board:\n{}",
                board
            );
        }
    }
}

#[test]
fn test_winner_is_some_mark_that_won() {
    for board in all_boards() {
        match winner(&board) {
            Some(mark) => assert!(has_won(&board, mark)),
            None => {
                assert!(!has_won(&board, Mark::X));
                assert!(!has_won(&board, Mark::O));
            }
        }
    }
}

#[test]
fn test_is_draw_iff_full_regardless_of_wins() {
    for board in all_boards() {
        let full = board.squares().iter().all(|s| *s != Square::Empty);
        assert_eq!(is_draw(&board), full);
        assert_eq!(empty_cells(&board).is_empty(), full);
    }
}

#[test]
fn test_empty_cells_row_major() {
    let board: Board = "X.O/.X./O..".parse().unwrap();
    assert_eq!(
        empty_cells(&board),
        vec![
            Position::TopCenter,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomRight,
        ]
    );
}
