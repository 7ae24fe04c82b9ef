//! AI vs AI games through the orchestrator

use chess_opponent::agent::ai::{AIConfig, AIPlayer, Difficulty};
use chess_opponent::game_repr::{GameStatus, Position, Rules};
use chess_opponent::orchestrator::{MatchConfig, Orchestrator};
use chess_opponent::GameResult;

fn play(white: Difficulty, black: Difficulty, config: &MatchConfig, seed: u64) -> chess_opponent::GameRecord {
    let orchestrator = Orchestrator::new(
        config,
        Box::new(AIPlayer::new(AIConfig::new(white).with_seed(seed))),
        Box::new(AIPlayer::new(AIConfig::new(black).with_seed(seed + 1))),
    )
    .unwrap();
    orchestrator.play()
}

/// Replays the record from the starting FEN, checking each move is legal.
fn replay(config: &MatchConfig, record: &chess_opponent::GameRecord) -> Position {
    let mut pos = Position::from_fen(&config.starting_fen).unwrap();
    for &mv in &record.moves {
        pos.try_apply(mv).unwrap();
    }
    pos
}

#[test]
fn test_random_players_finish_game() {
    let config = MatchConfig::new().with_max_plies(300);
    let record = play(Difficulty::Beginner, Difficulty::Intermediate, &config, 17);

    let pos = replay(&config, &record);
    assert_eq!(pos.to_fen(), record.final_fen);
    assert!(record.moves.len() <= 300);

    match record.result {
        GameResult::Unfinished => assert_eq!(record.moves.len(), 300),
        GameResult::WhiteWins | GameResult::BlackWins => {
            assert_eq!(pos.status(), GameStatus::Checkmate)
        }
        GameResult::Stalemate => assert_eq!(pos.status(), GameStatus::Stalemate),
        GameResult::Draw => assert!(matches!(pos.status(), GameStatus::Draw(_))),
    }
}

#[test]
fn test_search_players_play_legal_moves() {
    let config = MatchConfig::new().with_max_plies(8);
    let record = play(Difficulty::Advanced, Difficulty::Advanced, &config, 3);

    assert_eq!(record.result, GameResult::Unfinished);
    assert_eq!(record.moves.len(), 8);
    replay(&config, &record);
}

#[test]
fn test_search_player_converts_mate_in_one() {
    let config = MatchConfig::new()
        .with_fen("r5k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1")
        .with_max_plies(4);
    let record = play(Difficulty::Expert, Difficulty::Beginner, &config, 8);

    assert_eq!(record.result, GameResult::WhiteWins);
    assert_eq!(record.move_text(), "a1a8");
}

#[test]
fn test_seeded_games_repeat() {
    let config = MatchConfig::new().with_max_plies(40);
    let first = play(Difficulty::Beginner, Difficulty::Intermediate, &config, 99);
    let second = play(Difficulty::Beginner, Difficulty::Intermediate, &config, 99);

    assert_eq!(first, second);
}
