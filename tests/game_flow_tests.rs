//! Game Flow Integration Tests
//!
//! Tests for full game flows through [`GameSession`] including:
//! - Turn alternation
//! - Special moves (castling, en passant, promotion)
//! - Check, checkmate and stalemate transitions
//! - Undo and move history

use chess_rules::game::components::standard_position;
use chess_rules::{
    CoordinateMove, GameError, GameLogic, GameOverState, GamePhase, GameSession, GameSettings,
    Piece, PieceColor, PieceKind,
};
use tracing_subscriber::EnvFilter;

/// Route `[GAME]`/`[RULES]` logs to the test writer (`RUST_LOG=debug` to see them)
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Play a sequence of coordinate moves, panicking on the first rejection
fn play(session: &mut GameSession, moves: &[&str]) {
    for mv in moves {
        session
            .apply_uci(mv)
            .unwrap_or_else(|e| panic!("{} should be legal: {}", mv, e));
    }
}

fn total_legal_moves(session: &GameSession) -> usize {
    session
        .pieces()
        .iter()
        .map(|piece| session.legal_destinations(piece.position()).len())
        .sum()
}

// ============================================================================
// Turn Alternation Tests
// ============================================================================

#[test]
fn test_white_moves_first() {
    let session = GameSession::default();

    assert_eq!(session.side_to_move(), PieceColor::White);
    assert_eq!(session.phase(), GamePhase::Playing);
    assert_eq!(session.pieces().len(), 32);
    assert_eq!(total_legal_moves(&session), 20, "White should have 20 moves");
}

#[test]
fn test_turns_alternate() {
    init_tracing();
    let mut session = GameSession::default();

    play(&mut session, &["e2e4"]);
    assert_eq!(session.side_to_move(), PieceColor::Black);
    assert_eq!(total_legal_moves(&session), 20, "Black should have 20 replies");

    let err = session.apply_uci("g1f3").unwrap_err();
    assert!(matches!(err, GameError::InvalidMove { .. }));
    assert_eq!(session.side_to_move(), PieceColor::Black, "Rejected move keeps the turn");

    play(&mut session, &["e7e5"]);
    assert_eq!(session.side_to_move(), PieceColor::White);
    assert_eq!(session.logic().current_turn().move_number, 2);
}

#[test]
fn test_rejected_move_leaves_position_untouched() {
    let mut session = GameSession::default();
    let before = session.pieces().to_vec();

    assert!(session.apply_uci("e2e5").is_err());
    assert!(session.apply_uci("a1a3").is_err(), "Rook is blocked by its pawn");
    assert_eq!(session.pieces(), before.as_slice());
    assert!(session.history().is_empty());
}

#[test]
fn test_move_from_empty_square() {
    let mut session = GameSession::default();
    let err = session.apply_move((4, 3), (4, 4), None).unwrap_err();
    assert!(matches!(err, GameError::PieceNotFound { x: 4, y: 3 }));
}

#[test]
fn test_malformed_notation() {
    let mut session = GameSession::default();

    for bad in ["e2", "e2e4e5", "z9e4", "e7e8x"] {
        let err = session.apply_uci(bad).unwrap_err();
        assert!(
            matches!(err, GameError::Notation(_)),
            "{} should be a notation error, got {:?}",
            bad,
            err
        );
    }
}

// ============================================================================
// Win Condition Tests
// ============================================================================

#[test]
fn test_fools_mate() {
    init_tracing();
    let mut session = GameSession::default();

    play(&mut session, &["f2f3", "e7e5", "g2g4"]);
    let record = session.apply_uci("d8h4").unwrap();

    assert!(record.is_check);
    assert!(record.is_checkmate);
    assert_eq!(session.phase(), GamePhase::Checkmate);
    assert_eq!(session.game_over(), GameOverState::BlackWon);
    assert_eq!(session.game_over().winner(), Some(PieceColor::Black));
    assert!(session.logic().is_checkmate(PieceColor::White, session.pieces()));
    assert!(!session.logic().is_stalemate(PieceColor::White, session.pieces()));
    assert_eq!(session.moves_uci(), "f2f3 e7e5 g2g4 d8h4");
}

#[test]
fn test_no_moves_after_game_over() {
    let mut session = GameSession::default();
    play(&mut session, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    assert!(session.legal_destinations((0, 1)).is_empty());
    assert!(!session.is_legal_move((0, 1), (0, 2)));

    let err = session.apply_uci("a2a3").unwrap_err();
    assert!(matches!(
        err,
        GameError::GameOver {
            state: GameOverState::BlackWon
        }
    ));
}

#[test]
fn test_check_then_escape() {
    let mut session = GameSession::default();
    play(&mut session, &["e2e4", "f7f6"]);

    let record = session.apply_uci("d1h5").unwrap();
    assert!(record.is_check && !record.is_checkmate);
    assert_eq!(session.phase(), GamePhase::Check);

    // Only answers to the check are offered
    assert!(session.legal_destinations((0, 6)).is_empty());
    assert_eq!(session.legal_destinations((6, 6)), vec![(6, 5)]);

    play(&mut session, &["g7g6"]);
    assert_eq!(session.phase(), GamePhase::Playing);
    assert!(!session.game_over().is_game_over());
}

#[test]
fn test_stalemate_by_move() {
    let pieces = vec![
        Piece::new(PieceColor::Black, PieceKind::King, 0, 7),
        Piece::new(PieceColor::Black, PieceKind::Pawn, 0, 6),
        Piece::new(PieceColor::White, PieceKind::Pawn, 0, 5),
        Piece::new(PieceColor::White, PieceKind::King, 2, 5),
    ];
    let mut session =
        GameSession::from_pieces(pieces, PieceColor::White, GameSettings::default());
    assert_eq!(session.phase(), GamePhase::Playing);

    let record = session.apply_uci("c6c7").unwrap();
    assert!(!record.is_check);
    assert_eq!(session.phase(), GamePhase::Stalemate);
    assert_eq!(session.game_over(), GameOverState::Stalemate);
    assert!(session.game_over().is_draw());
}

#[test]
fn test_set_up_stalemate_reported_immediately() {
    let pieces = vec![
        Piece::new(PieceColor::Black, PieceKind::King, 0, 7),
        Piece::new(PieceColor::White, PieceKind::Queen, 1, 5),
        Piece::new(PieceColor::White, PieceKind::King, 2, 0),
    ];
    let session = GameSession::from_pieces(pieces, PieceColor::Black, GameSettings::default());

    assert_eq!(session.game_over(), GameOverState::Stalemate);
    assert!(session.logic().is_stalemate(PieceColor::Black, session.pieces()));
    assert!(!session.logic().is_checkmate(PieceColor::Black, session.pieces()));
}

// ============================================================================
// Special Move Tests
// ============================================================================

#[test]
fn test_kingside_castling_moves_rook() {
    let mut session = GameSession::default();
    play(&mut session, &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"]);

    assert!(session.is_legal_move((4, 0), (6, 0)));
    let record = session.apply_uci("e1g1").unwrap();

    assert!(record.is_castling);
    let king = session.piece_at((6, 0)).unwrap();
    let rook = session.piece_at((5, 0)).unwrap();
    assert_eq!(session.pieces()[king.index()].kind, PieceKind::King);
    assert_eq!(session.pieces()[rook.index()].kind, PieceKind::Rook);
    assert!(session.piece_at((7, 0)).is_none(), "h1 is vacated");
    assert!(session.piece_at((4, 0)).is_none(), "e1 is vacated");
}

#[test]
fn test_castling_forbidden_after_king_moves() {
    let mut session = GameSession::default();
    play(
        &mut session,
        &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1e2", "a7a6", "e2e1", "a6a5"],
    );

    assert!(!session.is_legal_move((4, 0), (6, 0)));
    assert!(session.apply_uci("e1g1").is_err());
}

#[test]
fn test_en_passant_capture_removes_pawn() {
    let mut session = GameSession::default();
    play(&mut session, &["e2e4", "a7a6", "e4e5", "d7d5"]);

    let target = session.logic().en_passant_target().copied().unwrap();
    assert_eq!(target.target, (3, 5));
    assert_eq!(target.pawn, (3, 4));

    let record = session.apply_uci("e5d6").unwrap();
    assert!(record.is_en_passant);
    assert_eq!(record.captured, Some(PieceKind::Pawn));
    assert!(session.piece_at((3, 4)).is_none(), "Passed pawn is removed");
    assert!(session.piece_at((3, 5)).is_some());
    assert_eq!(session.pieces().len(), 31);
    assert!(session.logic().en_passant_target().is_none());
}

#[test]
fn test_en_passant_expires_after_one_move() {
    let mut session = GameSession::default();
    play(&mut session, &["e2e4", "a7a6", "e4e5", "d7d5", "b1c3", "a6a5"]);

    assert!(!session.is_legal_move((4, 4), (3, 5)));
    assert!(matches!(
        session.apply_uci("e5d6"),
        Err(GameError::InvalidMove { .. })
    ));
}

fn promotion_position() -> Vec<Piece> {
    vec![
        Piece::new(PieceColor::Black, PieceKind::Rook, 1, 7),
        Piece::new(PieceColor::White, PieceKind::King, 4, 0),
        Piece::new(PieceColor::White, PieceKind::Pawn, 0, 6),
        Piece::new(PieceColor::Black, PieceKind::King, 7, 4),
    ]
}

#[test]
fn test_promotion_named_piece() {
    let mut session = GameSession::from_pieces(
        promotion_position(),
        PieceColor::White,
        GameSettings::default(),
    );

    let mv = CoordinateMove::new((0, 6), (0, 7))
        .unwrap()
        .with_promotion(PieceKind::Knight);
    let record = session.apply_coordinate_move(&mv).unwrap();

    assert_eq!(record.promotion, Some(PieceKind::Knight));
    let id = session.piece_at((0, 7)).unwrap();
    assert_eq!(session.pieces()[id.index()].kind, PieceKind::Knight);
    assert_eq!(session.moves_uci(), "a7a8n");
}

#[test]
fn test_promotion_capture_uses_default_piece() {
    //! The captured rook sits in an earlier slot than the pawn
    let mut session = GameSession::from_pieces(
        promotion_position(),
        PieceColor::White,
        GameSettings::default(),
    );

    let record = session.apply_uci("a7b8").unwrap();
    assert_eq!(record.captured, Some(PieceKind::Rook));
    assert_eq!(record.promotion, Some(PieceKind::Queen));

    let id = session.piece_at((1, 7)).unwrap();
    let promoted = session.pieces()[id.index()];
    assert_eq!(promoted.kind, PieceKind::Queen);
    assert_eq!(promoted.color, PieceColor::White);
    assert_eq!(session.pieces().len(), 3);
}

#[test]
fn test_promotion_respects_configured_default() {
    let settings = GameSettings {
        default_promotion: PieceKind::Rook,
        ..GameSettings::default()
    };
    let mut session = GameSession::from_pieces(promotion_position(), PieceColor::White, settings);

    play(&mut session, &["a7a8"]);
    let id = session.piece_at((0, 7)).unwrap();
    assert_eq!(session.pieces()[id.index()].kind, PieceKind::Rook);
}

#[test]
fn test_promotion_to_king_rejected() {
    let mut session = GameSession::from_pieces(
        promotion_position(),
        PieceColor::White,
        GameSettings::default(),
    );

    let err = session
        .apply_move((0, 6), (0, 7), Some(PieceKind::King))
        .unwrap_err();
    assert!(matches!(
        err,
        GameError::InvalidPromotion {
            kind: PieceKind::King
        }
    ));
    assert!(session.history().is_empty());
}

#[test]
fn test_promotion_argument_ignored_on_other_moves() {
    let mut session = GameSession::default();

    let record = session
        .apply_move((4, 1), (4, 3), Some(PieceKind::King))
        .unwrap();
    assert_eq!(record.promotion, None);
    let id = session.piece_at((4, 3)).unwrap();
    assert_eq!(session.pieces()[id.index()].kind, PieceKind::Pawn);
    assert_eq!(session.moves_uci(), "e2e4");
}

// ============================================================================
// Undo Tests
// ============================================================================

#[test]
fn test_undo_restores_position() {
    let mut session = GameSession::default();
    play(&mut session, &["e2e4", "d7d5", "e4d5"]);

    session.undo().unwrap();
    assert_eq!(session.side_to_move(), PieceColor::White);
    assert_eq!(session.pieces().len(), 32);
    assert_eq!(session.moves_uci(), "e2e4 d7d5");
    assert!(session.logic().en_passant_target().is_some());

    session.undo().unwrap();
    session.undo().unwrap();
    assert_eq!(session.pieces(), standard_position().as_slice());
    assert!(session.pieces().iter().all(|p| !p.has_moved));
    assert!(matches!(session.undo(), Err(GameError::NothingToUndo)));
}

#[test]
fn test_undo_reopens_finished_game() {
    let mut session = GameSession::default();
    play(&mut session, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    session.undo().unwrap();
    assert_eq!(session.game_over(), GameOverState::Playing);
    assert_eq!(session.side_to_move(), PieceColor::Black);
    play(&mut session, &["d8e7"]);
}

#[test]
fn test_undo_disabled() {
    let settings = GameSettings {
        allow_undo: false,
        ..GameSettings::default()
    };
    let mut session = GameSession::new(settings);
    play(&mut session, &["e2e4"]);

    assert!(matches!(session.undo(), Err(GameError::NothingToUndo)));
    assert_eq!(session.moves_uci(), "e2e4");
}

#[test]
fn test_undo_depth_limit() {
    let settings = GameSettings {
        max_undo_depth: 1,
        ..GameSettings::default()
    };
    let mut session = GameSession::new(settings);
    play(&mut session, &["e2e4", "e7e5"]);

    assert!(session.undo().is_ok());
    assert!(matches!(session.undo(), Err(GameError::NothingToUndo)));
    assert_eq!(session.moves_uci(), "e2e4");
}

#[test]
fn test_undo_depth_limit_keeps_most_recent_moves() {
    //! Older snapshots are dropped first once the limit is reached
    let settings = GameSettings {
        max_undo_depth: 2,
        ..GameSettings::default()
    };
    let mut session = GameSession::new(settings);
    play(&mut session, &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4"]);

    session.undo().unwrap();
    session.undo().unwrap();
    assert_eq!(session.moves_uci(), "e2e4 e7e5 g1f3");
    assert_eq!(session.side_to_move(), PieceColor::Black);
    assert!(matches!(session.undo(), Err(GameError::NothingToUndo)));
}

// ============================================================================
// Engine API Tests
// ============================================================================

#[test]
fn test_game_logic_en_passant_window() {
    //! e2-e4 opens the window for the d4 pawn; any other move closes it
    let mut pieces = vec![
        Piece::new(PieceColor::White, PieceKind::Pawn, 4, 1),
        Piece::new(PieceColor::Black, PieceKind::Pawn, 3, 3),
    ];
    let mut logic = GameLogic::new();

    pieces[0].set_position((4, 3));
    logic.set_en_passant_target(
        chess_rules::EnPassantTarget::from_double_step((4, 1), (4, 3)).unwrap(),
    );
    logic.toggle_turn();

    let black_pawn = chess_rules::PieceId(1);
    assert!(logic.is_legal_move(&pieces, black_pawn, (4, 2)));

    logic.clear_en_passant_target();
    assert!(!logic.is_legal_move(&pieces, black_pawn, (4, 2)));
}

#[test]
fn test_game_logic_queries_ignore_turn() {
    let pieces = standard_position();
    let logic = GameLogic::new();

    assert!(logic.has_any_legal_move(PieceColor::Black, &pieces));
    assert!(!logic.is_checkmate(PieceColor::Black, &pieces));
    assert!(!logic.is_stalemate(PieceColor::Black, &pieces));

    // Move hints follow the turn: White to move, so Black's knight has none
    let knight = pieces
        .iter()
        .position(|p| p.position() == (1, 7))
        .map(chess_rules::PieceId)
        .unwrap();
    assert!(logic.legal_destinations(&pieces, knight).is_empty());
    assert!(logic.is_legal_move_with(&pieces, knight, (2, 5), true));
}
