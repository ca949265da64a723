//! Chess piece movement rules
//!
//! Geometric legality per piece kind: can this piece reach the destination
//! from where it stands, given the current board? Turn ownership and
//! self-check are left to [`super::legality`].

use super::attacks::is_square_under_attack;
use super::board_state::BoardState;
use crate::game::components::{Piece, PieceKind};
use crate::game::resources::EnPassantTarget;

/// Check if a move is geometrically valid for `piece`
pub fn is_valid_move(
    piece: &Piece,
    to: (u8, u8),
    board_state: &BoardState<'_>,
    en_passant: Option<&EnPassantTarget>,
) -> bool {
    let from = piece.position();

    // Can't move to the same square
    if from == to {
        return false;
    }

    // Can't move off the board
    if to.0 > 7 || to.1 > 7 {
        return false;
    }

    // Can't capture your own pieces
    if board_state.get_piece_color(to) == Some(piece.color) {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => is_valid_pawn_move(piece, to, board_state, en_passant),
        PieceKind::Knight => is_valid_knight_move(from, to),
        PieceKind::Bishop => is_valid_bishop_move(from, to, board_state),
        PieceKind::Rook => is_valid_rook_move(from, to, board_state),
        PieceKind::Queen => is_valid_queen_move(from, to, board_state),
        PieceKind::King => is_valid_king_move(piece, to, board_state),
    }
}

/// All geometrically valid destinations for a piece
pub fn get_possible_moves(
    piece: &Piece,
    board_state: &BoardState<'_>,
    en_passant: Option<&EnPassantTarget>,
) -> Vec<(u8, u8)> {
    let mut moves = Vec::new();

    for x in 0..8 {
        for y in 0..8 {
            let to = (x, y);
            if is_valid_move(piece, to, board_state, en_passant) {
                moves.push(to);
            }
        }
    }

    moves
}

fn is_valid_pawn_move(
    piece: &Piece,
    to: (u8, u8),
    board_state: &BoardState<'_>,
    en_passant: Option<&EnPassantTarget>,
) -> bool {
    let direction = piece.color.pawn_direction();
    let from = piece.position();

    let dx = to.0 as i8 - from.0 as i8;
    let dy = to.1 as i8 - from.1 as i8;

    // Forward move
    if dx == 0 && dy == direction {
        return board_state.is_empty(to);
    }

    // Double move from the starting rank
    if dx == 0 && dy == 2 * direction && from.1 == piece.color.pawn_start_rank() {
        let intermediate = (from.0, (from.1 as i8 + direction) as u8);
        return board_state.is_empty(intermediate) && board_state.is_empty(to);
    }

    // Capture diagonally
    if dx.abs() == 1 && dy == direction {
        if let Some(target_color) = board_state.get_piece_color(to) {
            return target_color != piece.color;
        }
        return is_en_passant_capture(piece, to, board_state, en_passant);
    }

    false
}

/// Whether moving `piece` to `to` captures the vulnerable pawn en passant
///
/// The destination must be the empty target square, one diagonal step
/// forward, with the capturing pawn standing beside an enemy pawn on the
/// target's origin rank.
pub fn is_en_passant_capture(
    piece: &Piece,
    to: (u8, u8),
    board_state: &BoardState<'_>,
    en_passant: Option<&EnPassantTarget>,
) -> bool {
    let Some(ep) = en_passant else {
        return false;
    };
    if piece.kind != PieceKind::Pawn || ep.target != to || !board_state.is_empty(to) {
        return false;
    }

    let dx = to.0 as i8 - piece.file as i8;
    let dy = to.1 as i8 - piece.rank as i8;
    if dx.abs() != 1 || dy != piece.color.pawn_direction() {
        return false;
    }

    if piece.rank != ep.pawn.1 || piece.file.abs_diff(ep.pawn.0) != 1 {
        return false;
    }

    matches!(
        board_state.get_piece_at(ep.pawn),
        Some(victim) if victim.kind == PieceKind::Pawn && victim.color != piece.color
    )
}

fn is_valid_knight_move(from: (u8, u8), to: (u8, u8)) -> bool {
    let dx = (to.0 as i8 - from.0 as i8).abs();
    let dy = (to.1 as i8 - from.1 as i8).abs();
    (dx == 2 && dy == 1) || (dx == 1 && dy == 2)
}

fn is_valid_bishop_move(from: (u8, u8), to: (u8, u8), board_state: &BoardState<'_>) -> bool {
    let dx = (to.0 as i8 - from.0 as i8).abs();
    let dy = (to.1 as i8 - from.1 as i8).abs();

    // Must move diagonally
    if dx != dy {
        return false;
    }

    board_state.is_path_clear(from, to)
}

fn is_valid_rook_move(from: (u8, u8), to: (u8, u8), board_state: &BoardState<'_>) -> bool {
    // Must move horizontally or vertically
    if from.0 != to.0 && from.1 != to.1 {
        return false;
    }

    board_state.is_path_clear(from, to)
}

fn is_valid_queen_move(from: (u8, u8), to: (u8, u8), board_state: &BoardState<'_>) -> bool {
    is_valid_rook_move(from, to, board_state) || is_valid_bishop_move(from, to, board_state)
}

fn is_valid_king_move(king: &Piece, to: (u8, u8), board_state: &BoardState<'_>) -> bool {
    let dx = (to.0 as i8 - king.file as i8).abs();
    let dy = (to.1 as i8 - king.rank as i8).abs();

    // King moves one square in any direction
    if dx <= 1 && dy <= 1 {
        return true;
    }

    dx == 2 && dy == 0 && can_castle(king, to, board_state)
}

/// Rook start and landing squares for a two-file king move to `to`
///
/// Returns `None` when `to` is not a castling destination for `king`.
pub fn castling_rook_squares(king: &Piece, to: (u8, u8)) -> Option<((u8, u8), (u8, u8))> {
    if king.kind != PieceKind::King || to.1 != king.rank || king.file.abs_diff(to.0) != 2 {
        return None;
    }
    if to.0 > king.file {
        Some(((7, king.rank), (to.0 - 1, king.rank)))
    } else {
        Some(((0, king.rank), (to.0 + 1, king.rank)))
    }
}

/// Castling rights are derived on every query: unmoved king, unmoved rook of
/// the same color in the corner, empty squares between them, and no attack
/// on the king's start, pass-through or landing square.
fn can_castle(king: &Piece, to: (u8, u8), board_state: &BoardState<'_>) -> bool {
    if king.has_moved {
        return false;
    }

    let Some((rook_from, _)) = castling_rook_squares(king, to) else {
        return false;
    };

    match board_state.get_piece_at(rook_from) {
        Some(rook) if rook.is(king.color, PieceKind::Rook) && !rook.has_moved => {}
        _ => return false,
    }

    if !board_state.is_path_clear(king.position(), rook_from) {
        return false;
    }

    let step: i8 = if to.0 > king.file { 1 } else { -1 };
    let pass_through = ((king.file as i8 + step) as u8, king.rank);

    [king.position(), pass_through, to]
        .iter()
        .all(|&square| !is_square_under_attack(board_state, square, king.color))
}
