//! Computer opponent: move selection by difficulty.
//!
//! - **Easy** picks uniformly among the empty cells.
//! - **Hard** runs an exhaustive minimax over the remaining game tree and
//!   never gives up a result it could have guaranteed.
//!
//! Neither strategy mutates the board it is given; the caller applies the
//! returned position exactly once.

mod minimax;
mod random;

pub use minimax::{DRAW, LOSS, WIN, best_move, game_value, winning_move};
pub use random::random_move;

use super::{Board, Mark, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// How hard the computer plays.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniform random choice among empty cells.
    Easy,
    /// Optimal play by exhaustive search.
    #[default]
    Hard,
}

impl Difficulty {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Hard => "Hard",
        }
    }

    /// Toggles between `Easy` and `Hard`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Easy => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }
}

/// Chooses the computer's next cell.
///
/// Returns `None` if the board has no empty cell; callers are expected
/// to stop asking once the game is decided.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    computer: Mark,
    human: Mark,
    rng: &mut R,
) -> Option<Position> {
    match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Hard => best_move(board, computer, human),
    }
}

/// A difficulty paired with the randomness source the easy level draws from.
#[derive(Debug, Clone)]
pub struct Opponent<R = StdRng> {
    difficulty: Difficulty,
    rng: R,
}

impl Opponent<StdRng> {
    /// Creates an opponent seeded from the operating system.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, StdRng::from_os_rng())
    }

    /// Creates an opponent with a fixed seed, for reproducible play.
    #[instrument]
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Opponent<R> {
    /// Creates an opponent drawing from the given RNG.
    pub fn with_rng(difficulty: Difficulty, rng: R) -> Self {
        Self { difficulty, rng }
    }

    /// Returns the current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Changes the difficulty; applies from the next move.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!(%difficulty, "Difficulty changed");
        self.difficulty = difficulty;
    }

    /// Chooses the computer's next cell on `board`.
    pub fn select_move(&mut self, board: &Board, computer: Mark, human: Mark) -> Option<Position> {
        select_move(board, self.difficulty, computer, human, &mut self.rng)
    }
}
