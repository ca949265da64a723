//! Attack and check detection
//!
//! A square is attacked when some opposing piece could reach it by movement
//! geometry alone: no turn restriction, no self-check simulation. Using full
//! legality here would recurse through the simulation in
//! [`super::legality`]. Pawns attack only along their capture diagonals and
//! kings attack only adjacent squares (castling never attacks).

use super::board_state::BoardState;
use crate::game::components::{Piece, PieceColor, PieceId, PieceKind};

/// Whether `piece` covers `target` on `board`
pub fn piece_attacks_square(piece: &Piece, target: (u8, u8), board: &BoardState<'_>) -> bool {
    let from = piece.position();
    if from == target {
        return false;
    }

    let dx = target.0 as i8 - from.0 as i8;
    let dy = target.1 as i8 - from.1 as i8;

    match piece.kind {
        PieceKind::Pawn => dy == piece.color.pawn_direction() && dx.abs() == 1,
        PieceKind::Knight => dx.abs() * dy.abs() == 2,
        PieceKind::King => dx.abs() <= 1 && dy.abs() <= 1,
        PieceKind::Bishop => dx.abs() == dy.abs() && board.is_path_clear(from, target),
        PieceKind::Rook => (dx == 0 || dy == 0) && board.is_path_clear(from, target),
        PieceKind::Queen => {
            (dx == 0 || dy == 0 || dx.abs() == dy.abs()) && board.is_path_clear(from, target)
        }
    }
}

/// Whether any piece not of `defending_color` attacks `pos` on an already built board
pub fn is_square_under_attack(
    board: &BoardState<'_>,
    pos: (u8, u8),
    defending_color: PieceColor,
) -> bool {
    if pos.0 > 7 || pos.1 > 7 {
        return false;
    }
    board
        .pieces()
        .iter()
        .filter(|piece| piece.color != defending_color)
        .any(|piece| piece_attacks_square(piece, pos, board))
}

/// Whether `pos` is attacked by the side opposing `defending_color`
pub fn square_is_attacked(pos: (u8, u8), defending_color: PieceColor, pieces: &[Piece]) -> bool {
    let board = BoardState::rebuild(pieces);
    is_square_under_attack(&board, pos, defending_color)
}

/// Slot of `color`'s king, if there is one
pub fn find_king(color: PieceColor, pieces: &[Piece]) -> Option<PieceId> {
    pieces
        .iter()
        .position(|piece| piece.is(color, PieceKind::King))
        .map(PieceId)
}

/// Whether `color`'s king is attacked
///
/// A position without a king of that color is never in check.
pub fn king_in_check(color: PieceColor, pieces: &[Piece]) -> bool {
    match find_king(color, pieces) {
        Some(id) => square_is_attacked(pieces[id.index()].position(), color, pieces),
        None => false,
    }
}
