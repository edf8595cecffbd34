//! Full-game scenarios through the session driver.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use morris_engine::{
    DrawReason, GameOver, GameSession, Player, Position, Variant, WinReason,
};

#[test]
fn test_threefold_repetition_on_exactly_the_third_occurrence() {
    // Movement phase; both sides shuttle one piece back and forth.
    // Neither shuttle touches a mill line, so no captures interfere.
    let position: Position = "w:wa7,c5,e5,e4:bc4,c3,e3,g1:10".parse().unwrap();
    let mut session = GameSession::with_position(Variant::Classic9, position).unwrap();

    let shuttle = ["a7-d7", "g1-d1", "d7-a7", "d1-g1"];
    for mv in shuttle.iter().chain(shuttle.iter()) {
        session.play_move_str(mv).unwrap();
        assert_eq!(session.game_over(), None, "ended early on {mv}");
    }

    // The ninth shuttle ply reaches its board for the third time.
    session.play_move_str("a7-d7").unwrap();
    assert_eq!(
        session.game_over(),
        Some(GameOver::Draw {
            reason: DrawReason::ThreefoldRepetition,
        })
    );
    assert!(session.legal_moves().is_empty());
}

#[test]
fn test_capture_below_three_pieces_wins() {
    // White closes a1-d1-g1 by sliding g4-g1; every black piece is
    // loose, and Black is already down to the minimum of three.
    let position: Position = "w:wa1,d1,b4,g4:bg7,f6,f4:11".parse().unwrap();
    let mut session = GameSession::with_position(Variant::Classic9, position).unwrap();

    session.play_move_str("g4-g1xg7").unwrap();

    assert_eq!(session.position().piece_count(Player::Black), 2);
    assert_eq!(
        session.game_over(),
        Some(GameOver::Winner {
            winner: Player::White,
            reason: WinReason::MaterialLoss,
        })
    );
}

#[test]
fn test_capture_on_the_brink_of_repetition_keeps_the_game_live() {
    // Both sides shuttle until one more quiet ply would draw; White
    // closes a1-d1-g1 instead. The capture resets the draw clocks, so
    // the formerly fatal shuttle ply is harmless afterwards.
    let position: Position = "w:wa1,d1,b4,g4,c5:bg7,f6,f4,e3:11".parse().unwrap();
    let mut session = GameSession::with_position(Variant::Classic9, position).unwrap();

    let shuttle = ["c5-d5", "e3-d3", "d5-c5", "d3-e3"];
    for mv in shuttle.iter().chain(shuttle.iter()) {
        session.play_move_str(mv).unwrap();
        assert_eq!(session.game_over(), None, "ended early on {mv}");
    }

    // One more quiet shuttle ply would be a threefold draw.
    let mut quiet = session.clone();
    quiet.play_move_str("c5-d5").unwrap();
    assert_eq!(
        quiet.game_over(),
        Some(GameOver::Draw {
            reason: DrawReason::ThreefoldRepetition,
        })
    );

    session.play_move_str("g4-g1xg7").unwrap();
    assert_eq!(session.game_over(), None);
    assert_eq!(session.position().piece_count(Player::Black), 3);

    // Black is flying now; the shuttle square is still reachable and
    // the cleared clocks leave the game running.
    session.play_move_str("e3-d3").unwrap();
    session.play_move_str("c5-d5").unwrap();
    assert_eq!(session.game_over(), None);
}

#[test]
fn test_history_tracks_every_position() {
    let mut session = GameSession::new(Variant::Classic9);
    for mv in ["d5", "d3", "c5", "e3"] {
        session.play_move_str(mv).unwrap();
    }

    let history = session.history();
    assert_eq!(history.len(), 5);
    assert_eq!(history.back(), Some(session.position()));
    assert_eq!(history.front().copied(), Some(Position::default()));
    // Plies ascend one at a time from the start.
    for (i, position) in history.iter().enumerate() {
        assert_eq!(position.ply, i as u32);
    }
}

#[test]
fn test_random_playouts_preserve_invariants() {
    for variant in [Variant::Classic9, Variant::Extended12] {
        let mut rng = StdRng::seed_from_u64(0x5EED + variant.pieces_per_side() as u64);

        for _ in 0..20 {
            let mut session = GameSession::new(variant);

            for _ in 0..400 {
                if session.game_over().is_some() {
                    break;
                }

                let moves = session.legal_moves().to_vec();
                assert!(!moves.is_empty(), "live game must offer moves");

                let mv = moves[rng.gen_range(0..moves.len())];
                session.try_move(mv).unwrap();
                session.position().validate(variant).unwrap();

                // The text codec must round-trip every reachable state.
                let text = session.position_string();
                assert_eq!(text.parse::<Position>().unwrap(), *session.position());
            }

            if session.game_over().is_none() {
                assert!(!session.legal_moves().is_empty());
            }
        }
    }
}
