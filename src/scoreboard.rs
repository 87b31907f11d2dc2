//! Running tally of finished games.

use crate::session::GameResult;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Wins for each side plus draws, kept for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games the human won.
    human_wins: u32,
    /// Games the computer won.
    computer_wins: u32,
    /// Games that ended full with no line.
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one finished game.
    #[instrument(skip(self))]
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::HumanWin => self.human_wins += 1,
            GameResult::ComputerWin => self.computer_wins += 1,
            GameResult::Draw => self.draws += 1,
        }
        debug!(
            human_wins = self.human_wins,
            computer_wins = self.computer_wins,
            draws = self.draws,
            "Score updated"
        );
    }

    /// Total games counted.
    pub fn games_played(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }

    /// Zeroes every counter.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You: {} | AI: {} | Draws: {}",
            self.human_wins, self.computer_wins, self.draws
        )
    }
}
