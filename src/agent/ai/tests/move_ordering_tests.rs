// Tests for move ordering on real positions

use crate::agent::ai::move_ordering::{order_moves, score_move};
use crate::game_repr::{Move, Position, Rules};

fn is_tactical(mv: &Move) -> bool {
    mv.is_capture() || mv.is_promotion()
}

fn assert_tactical_first(moves: &[Move]) {
    if let Some(first_quiet) = moves.iter().position(|m| !is_tactical(m)) {
        assert!(
            moves[first_quiet..].iter().all(|m| !is_tactical(m)),
            "capture or promotion found after a quiet move: {:?}",
            moves
        );
    }
}

#[test]
fn test_ordering_preserves_move_set() {
    let pos = Position::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4").unwrap();
    let original = pos.legal_moves();
    let mut ordered = original.clone();
    order_moves(&mut ordered);

    assert_eq!(ordered.len(), original.len());
    for mv in &original {
        assert!(ordered.contains(mv), "{} lost during ordering", mv);
    }
}

#[test]
fn test_captures_and_promotions_first() {
    // bxa8 and b8 promote, exd5 captures, the rest are quiet
    let pos = Position::from_fen("r3k3/1P6/8/3p4/4P3/8/8/4K3 w - - 0 1").unwrap();
    let mut moves = pos.legal_moves();
    order_moves(&mut moves);

    assert_tactical_first(&moves);

    // Capturing promotions outrank everything else
    let top = score_move(&moves[0]);
    assert_eq!(top, 30);
    assert!(moves[0].is_capture() && moves[0].is_promotion());

    let scores: Vec<i32> = moves.iter().map(score_move).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]), "scores not descending: {:?}", scores);
}

#[test]
fn test_en_passant_counts_as_capture() {
    let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").unwrap();
    let mut moves = pos.legal_moves();
    order_moves(&mut moves);

    assert_eq!(moves[0].to_string(), "e5d6");
    assert!(moves[0].is_capture());
    assert_tactical_first(&moves);
}

#[test]
fn test_quiet_positions_keep_generation_order() {
    let pos = Position::default();
    let original = pos.legal_moves();
    let mut ordered = original.clone();
    order_moves(&mut ordered);

    assert_eq!(ordered, original);
}
