//! Tic-tac-toe AI - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use std::path::PathBuf;
use tictactoe_ai::{Board, Difficulty, Mark, Opponent, Outcome, Position, Settings, outcome};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            symbol,
            difficulty,
            seed,
            log_file,
        } => run_play(config, symbol, difficulty, seed, log_file),
        Command::Move {
            board,
            computer,
            difficulty,
            seed,
            json,
        } => {
            init_stderr_logging();
            run_move(board, computer, difficulty, seed, json)
        }
        Command::Outcome { board } => {
            init_stderr_logging();
            println!("{}", outcome(&board));
            Ok(())
        }
    }
}

/// Headless commands log to stderr so stdout carries only the answer.
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive game
fn run_play(
    config: Option<PathBuf>,
    symbol: Option<Mark>,
    difficulty: Option<Difficulty>,
    seed: Option<u64>,
    log_file: PathBuf,
) -> Result<()> {
    let settings = Settings::load(config.as_deref())
        .context("Failed to load settings")?
        .with_overrides(symbol, difficulty, seed);

    tictactoe_ai::run_tui(settings, &log_file)
}

/// A chosen move, as printed by `move --json`.
#[derive(Debug, Serialize)]
struct MoveReport {
    row: usize,
    col: usize,
    position: Position,
    mark: Mark,
}

/// Pick and print the computer's move
#[instrument(skip(board), fields(board = %board))]
fn run_move(
    board: Board,
    computer: Mark,
    difficulty: Difficulty,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let state = outcome(&board);
    if state != Outcome::InProgress {
        bail!("Board is already decided: {}", state);
    }

    let mut opponent = match seed {
        Some(seed) => Opponent::seeded(difficulty, seed),
        None => Opponent::new(difficulty),
    };

    let position = opponent
        .select_move(&board, computer, computer.opponent())
        .context("No empty cell to play")?;
    info!(%position, "Move selected");

    if json {
        let (row, col) = position.coords();
        let report = MoveReport {
            row,
            col,
            position,
            mark: computer,
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        let (row, col) = position.coords();
        println!("{} {} ({})", row, col, position);
    }

    Ok(())
}
