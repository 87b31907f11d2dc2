//! Command-line interface for tictactoe_ai.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_ai::{Board, Difficulty, Mark};

/// Tic-tac-toe against a minimax computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe_ai")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Settings file (TOML). Defaults to ./tictactoe.toml if present.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Your symbol; the computer plays the other one
        #[arg(long, value_enum)]
        symbol: Option<Mark>,

        /// Computer difficulty
        #[arg(long, value_enum)]
        difficulty: Option<Difficulty>,

        /// Seed for reproducible easy-mode moves
        #[arg(long)]
        seed: Option<u64>,

        /// Where to write logs while the UI owns the terminal
        #[arg(long, default_value = "tictactoe.log")]
        log_file: PathBuf,
    },

    /// Print the computer's move for a board
    Move {
        /// Board as nine cells, row-major: X, O, or '.' for empty (e.g. "XX./OO./...")
        #[arg(short, long)]
        board: Board,

        /// The computer's mark
        #[arg(long, value_enum, default_value_t = Mark::O)]
        computer: Mark,

        /// Computer difficulty
        #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
        difficulty: Difficulty,

        /// Seed for reproducible easy-mode moves
        #[arg(long)]
        seed: Option<u64>,

        /// Print the move as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print whether a board is won, drawn or still in progress
    Outcome {
        /// Board as nine cells, row-major: X, O, or '.' for empty
        #[arg(short, long)]
        board: Board,
    },
}
