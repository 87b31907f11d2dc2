//! Tests for the human-versus-computer session flow.

use tictactoe_ai::ai::best_move;
use tictactoe_ai::{
    Difficulty, GameResult, GameSession, Mark, Opponent, Outcome, Phase, Position,
    SessionErrorKind, Settings, empty_cells,
};

fn session(human: Mark, difficulty: Difficulty, seed: u64) -> GameSession {
    GameSession::with_opponent(human, Opponent::seeded(difficulty, seed))
}

/// Plays one game with `strategy` choosing the human's cells.
fn play_out(session: &mut GameSession, strategy: impl Fn(&GameSession) -> Position) -> GameResult {
    loop {
        let pos = strategy(session);
        match session.play(pos).unwrap() {
            Phase::GameOver(result) => return result,
            Phase::AwaitingHuman => {}
            Phase::AwaitingComputer => panic!("computer turn leaked out of play()"),
        }
    }
}

fn first_empty(session: &GameSession) -> Position {
    empty_cells(session.board())[0]
}

fn perfect(session: &GameSession) -> Position {
    best_move(session.board(), session.human(), session.computer()).unwrap()
}

#[test]
fn test_new_session_awaits_human() {
    let session = session(Mark::X, Difficulty::Hard, 0);
    assert_eq!(session.phase(), Phase::AwaitingHuman);
    assert!(session.board().is_blank());
    assert_eq!(session.computer(), Mark::O);
    assert_eq!(session.message(), None);
    assert_eq!(session.scoreboard().games_played(), 0);
}

#[test]
fn test_each_turn_fills_one_cell_per_side() {
    let mut session = session(Mark::O, Difficulty::Easy, 1);
    let phase = session.play(Position::TopLeft).unwrap();
    assert_eq!(phase, Phase::AwaitingHuman);
    assert_eq!(session.board().count(Mark::O), 1);
    assert_eq!(session.board().count(Mark::X), 1);
    let reply = session.last_computer_move().unwrap();
    assert_ne!(reply, Position::TopLeft);
}

#[test]
fn test_hard_opponent_never_loses_to_naive_play() {
    let mut session = session(Mark::X, Difficulty::Hard, 0);
    let result = play_out(&mut session, first_empty);
    assert_ne!(result, GameResult::HumanWin);
    assert_eq!(session.scoreboard().games_played(), 1);
    assert_eq!(session.message(), Some(result.message()));
}

#[test]
fn test_perfect_play_against_hard_always_draws() {
    let mut session = session(Mark::X, Difficulty::Hard, 0);
    for _ in 0..3 {
        assert_eq!(play_out(&mut session, perfect), GameResult::Draw);
        assert_eq!(session.outcome(), Outcome::Draw);
        session.restart();
    }
    assert_eq!(*session.scoreboard().draws(), 3);
    assert_eq!(*session.scoreboard().human_wins(), 0);
    assert_eq!(*session.scoreboard().computer_wins(), 0);
}

#[test]
fn test_perfect_play_beats_easy_sometimes() {
    let mut session = session(Mark::X, Difficulty::Easy, 17);
    for _ in 0..20 {
        let result = play_out(&mut session, perfect);
        assert_ne!(result, GameResult::ComputerWin);
        session.restart();
    }
    assert_eq!(session.scoreboard().games_played(), 20);
    assert!(*session.scoreboard().human_wins() > 0);
}

#[test]
fn test_moves_after_game_over_rejected() {
    let mut session = session(Mark::X, Difficulty::Hard, 0);
    play_out(&mut session, first_empty);
    let before = *session.scoreboard();
    let board = *session.board();

    let pos = empty_cells(&board).first().copied().unwrap_or(Position::Center);
    let err = session.play(pos).unwrap_err();
    assert_eq!(err.kind, SessionErrorKind::GameOver);
    assert_eq!(*session.scoreboard(), before);
    assert_eq!(*session.board(), board);
}

#[test]
fn test_restart_keeps_scores_reset_all_clears_them() {
    let mut session = session(Mark::X, Difficulty::Hard, 0);
    play_out(&mut session, first_empty);

    session.restart();
    assert!(session.board().is_blank());
    assert_eq!(session.phase(), Phase::AwaitingHuman);
    assert_eq!(session.last_computer_move(), None);
    assert_eq!(session.scoreboard().games_played(), 1);

    session.reset_all();
    assert!(session.board().is_blank());
    assert_eq!(session.scoreboard().games_played(), 0);
}

#[test]
fn test_changing_symbol_mid_game_restarts() {
    let mut session = session(Mark::X, Difficulty::Hard, 0);
    session.play(Position::Center).unwrap();

    session.set_human_mark(Mark::O);
    assert_eq!(session.human(), Mark::O);
    assert_eq!(session.computer(), Mark::X);
    assert!(session.board().is_blank());

    session.play(Position::Center).unwrap();
    assert_eq!(session.board().count(Mark::O), 1);
    assert_eq!(session.board().count(Mark::X), 1);
}

#[test]
fn test_same_symbol_keeps_game() {
    let mut session = session(Mark::X, Difficulty::Hard, 0);
    session.play(Position::Center).unwrap();
    session.set_human_mark(Mark::X);
    assert!(!session.board().is_blank());
}

#[test]
fn test_difficulty_change_applies_mid_game() {
    let mut session = session(Mark::X, Difficulty::Easy, 4);
    session.play(Position::TopLeft).unwrap();
    session.set_difficulty(Difficulty::Hard);
    assert_eq!(session.difficulty(), Difficulty::Hard);
    assert!(!session.board().is_blank());
}

#[test]
fn test_from_settings() {
    let settings = Settings::new().with_overrides(Some(Mark::O), Some(Difficulty::Easy), Some(3));
    let session = GameSession::from_settings(&settings);
    assert_eq!(session.human(), Mark::O);
    assert_eq!(session.difficulty(), Difficulty::Easy);
}
