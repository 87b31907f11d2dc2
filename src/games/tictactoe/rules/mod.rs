//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. None of them mutate the board; the
//! move selector and the session compose them to detect terminal states.

pub mod draw;
pub mod moves;
pub mod outcome;
pub mod win;

pub use draw::is_draw;
pub use moves::empty_cells;
pub use outcome::outcome;
pub use win::{has_won, winner};
