//! Legality gate and hypothetical-move simulation
//!
//! [`is_legal_move`] is the single source of truth for legality. It runs, in
//! order: bounds, same-color occupancy, turn ownership, piece geometry, and a
//! full simulation of the move that rejects anything leaving the mover's own
//! king attacked. Simulating on a cloned position set is cheap on an 8x8
//! board and sidesteps pin and discovered-check bookkeeping entirely.

use super::attacks::king_in_check;
use super::board_state::BoardState;
use super::piece_moves::{castling_rook_squares, is_en_passant_capture, is_valid_move};
use crate::game::components::{Piece, PieceColor, PieceId, PieceKind};
use crate::game::resources::EnPassantTarget;
use tracing::debug;

/// Session state a legality query depends on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveContext {
    /// Side whose turn it is; `None` skips the turn check (attack probing,
    /// hypothetical enumeration)
    pub side_to_move: Option<PieceColor>,
    pub en_passant: Option<EnPassantTarget>,
}

impl MoveContext {
    pub fn ignoring_turn(en_passant: Option<EnPassantTarget>) -> Self {
        Self {
            side_to_move: None,
            en_passant,
        }
    }
}

/// Every piece a move touches
///
/// Shared by the self-check simulation and by sessions applying a real move,
/// so both mutate the position set the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlan {
    pub mover: PieceId,
    pub from: (u8, u8),
    pub to: (u8, u8),
    /// Piece removed by the move (destination occupant or en-passant victim)
    pub captured: Option<PieceId>,
    /// Rook moved alongside a castling king, with its landing square
    pub rook_relocation: Option<(PieceId, (u8, u8))>,
    pub is_en_passant: bool,
    /// Target created by a two-square pawn advance
    pub double_step: Option<EnPassantTarget>,
    /// Pawn reaching its last rank
    pub promotes: bool,
}

impl MovePlan {
    /// Classify moving `mover` to `to` on `board`
    ///
    /// Does not check legality. Returns `None` when `mover` is not a slot of
    /// the board's position set.
    pub fn resolve(
        board: &BoardState<'_>,
        mover: PieceId,
        to: (u8, u8),
        en_passant: Option<&EnPassantTarget>,
    ) -> Option<Self> {
        let piece = board.piece(mover)?;
        let from = piece.position();

        let is_en_passant = is_en_passant_capture(piece, to, board, en_passant);
        let captured = if is_en_passant {
            en_passant.and_then(|ep| board.id_at(ep.pawn))
        } else {
            board.id_at(to).filter(|&id| id != mover)
        };

        let rook_relocation = castling_rook_squares(piece, to).and_then(|(rook_from, rook_to)| {
            board
                .id_at(rook_from)
                .filter(|&id| {
                    board
                        .piece(id)
                        .is_some_and(|rook| rook.is(piece.color, PieceKind::Rook))
                })
                .map(|id| (id, rook_to))
        });

        let is_pawn = piece.kind == PieceKind::Pawn;
        let double_step = if is_pawn {
            EnPassantTarget::from_double_step(from, to)
        } else {
            None
        };

        Some(Self {
            mover,
            from,
            to,
            captured,
            rook_relocation,
            is_en_passant,
            double_step,
            promotes: is_pawn && to.1 == piece.color.promotion_rank(),
        })
    }

    pub fn is_castling(&self) -> bool {
        self.rook_relocation.is_some()
    }

    /// Relocate the mover (and castling rook), then drop the captured piece
    ///
    /// Slots after a removed capture shift down by one.
    pub fn apply(&self, pieces: &mut Vec<Piece>) {
        if let Some(piece) = pieces.get_mut(self.mover.index()) {
            piece.set_position(self.to);
        }
        if let Some((rook, landing)) = self.rook_relocation {
            if let Some(piece) = pieces.get_mut(rook.index()) {
                piece.set_position(landing);
            }
        }
        if let Some(captured) = self.captured {
            if captured.index() < pieces.len() {
                pieces.remove(captured.index());
            }
        }
    }
}

/// Position set after moving `mover` to `to`, leaving the input untouched
pub fn simulate_move(
    pieces: &[Piece],
    mover: PieceId,
    to: (u8, u8),
    en_passant: Option<&EnPassantTarget>,
) -> Option<Vec<Piece>> {
    let board = BoardState::rebuild(pieces);
    let plan = MovePlan::resolve(&board, mover, to, en_passant)?;
    let mut simulated = pieces.to_vec();
    plan.apply(&mut simulated);
    Some(simulated)
}

/// Whether the move would leave the mover's own king attacked
pub fn leaves_king_in_check(
    pieces: &[Piece],
    mover: PieceId,
    to: (u8, u8),
    en_passant: Option<&EnPassantTarget>,
) -> bool {
    let Some(color) = pieces.get(mover.index()).map(|piece| piece.color) else {
        return false;
    };
    simulate_move(pieces, mover, to, en_passant)
        .is_some_and(|simulated| king_in_check(color, &simulated))
}

/// Whether `mover` may legally move to `to`
pub fn is_legal_move(pieces: &[Piece], mover: PieceId, to: (u8, u8), ctx: &MoveContext) -> bool {
    let Some(piece) = pieces.get(mover.index()) else {
        return false;
    };

    if to.0 > 7 || to.1 > 7 {
        return false;
    }

    let board = BoardState::rebuild(pieces);

    if board.get_piece_color(to) == Some(piece.color) {
        return false;
    }

    if ctx.side_to_move.is_some_and(|side| side != piece.color) {
        return false;
    }

    if !is_valid_move(piece, to, &board, ctx.en_passant.as_ref()) {
        return false;
    }

    if leaves_king_in_check(pieces, mover, to, ctx.en_passant.as_ref()) {
        debug!(
            "[RULES] {} {:?} {:?} -> {:?} rejected: own king left in check",
            piece.color, piece.kind, piece.position(), to
        );
        return false;
    }

    true
}

/// Every legal destination for `mover`, probed over all 64 squares
pub fn legal_destinations(pieces: &[Piece], mover: PieceId, ctx: &MoveContext) -> Vec<(u8, u8)> {
    let mut moves = Vec::new();
    for x in 0..8 {
        for y in 0..8 {
            if is_legal_move(pieces, mover, (x, y), ctx) {
                moves.push((x, y));
            }
        }
    }
    moves
}

/// Whether any piece of `color` has a legal move, ignoring whose turn it is
pub fn has_any_legal_move(
    color: PieceColor,
    pieces: &[Piece],
    en_passant: Option<&EnPassantTarget>,
) -> bool {
    let ctx = MoveContext::ignoring_turn(en_passant.copied());
    pieces
        .iter()
        .enumerate()
        .filter(|(_, piece)| piece.color == color)
        .any(|(i, _)| !legal_destinations(pieces, PieceId(i), &ctx).is_empty())
}
