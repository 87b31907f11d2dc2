//! Keyboard mapping and cursor movement.

use crate::games::tictactoe::Position;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Something the user asked the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor with an arrow key.
    MoveCursor(KeyCode),
    /// Play the cell under the cursor.
    PlaceAtCursor,
    /// Play a specific cell.
    Place(Position),
    /// New game, scores kept.
    Restart,
    /// New game, scores cleared.
    ResetAll,
    /// Swap which mark the human plays.
    ToggleSymbol,
    /// Swap between easy and hard.
    ToggleDifficulty,
    /// Leave the app.
    Quit,
}

/// Maps a key press to an action.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(key.code))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Char(c) if c.is_ascii_digit() => Position::from_digit(c).map(Action::Place),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::ResetAll),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::ToggleSymbol),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::ToggleDifficulty),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys; stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = cursor.coords();

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_coords(row, col).unwrap_or(cursor)
}
