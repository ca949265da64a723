//! Game-state manager
//!
//! [`GameLogic`] holds the only mutable state the rules depend on: whose turn
//! it is and the en-passant window. The piece list stays with the caller and
//! is borrowed per query. There is no process-wide instance; each game owns
//! its own `GameLogic`.

use crate::game::components::{GamePhase, Piece, PieceColor, PieceId};
use crate::game::resources::{CurrentTurn, EnPassantTarget};
use crate::game::rules::{self, MoveContext};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameLogic {
    turn: CurrentTurn,
    en_passant: Option<EnPassantTarget>,
}

impl GameLogic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logic for a position where `color` moves first
    pub fn starting_with(color: PieceColor) -> Self {
        Self {
            turn: CurrentTurn::starting_with(color),
            en_passant: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn current_turn(&self) -> CurrentTurn {
        self.turn
    }

    pub fn side_to_move(&self) -> PieceColor {
        self.turn.color
    }

    pub fn is_white_turn(&self) -> bool {
        self.turn.is_white()
    }

    /// Hand the move to the other side; call once per accepted half-move
    pub fn toggle_turn(&mut self) {
        self.turn.switch();
    }

    pub fn en_passant_target(&self) -> Option<&EnPassantTarget> {
        self.en_passant.as_ref()
    }

    /// Open the en-passant window after a two-square pawn advance
    pub fn set_en_passant_target(&mut self, target: EnPassantTarget) {
        self.en_passant = Some(target);
    }

    pub fn clear_en_passant_target(&mut self) {
        self.en_passant = None;
    }

    fn context(&self, ignore_turn: bool) -> MoveContext {
        MoveContext {
            side_to_move: (!ignore_turn).then_some(self.turn.color),
            en_passant: self.en_passant,
        }
    }

    /// Whether the piece in slot `piece` may move to `to` on this turn
    pub fn is_legal_move(&self, pieces: &[Piece], piece: PieceId, to: (u8, u8)) -> bool {
        self.is_legal_move_with(pieces, piece, to, false)
    }

    /// [`GameLogic::is_legal_move`] with an explicit turn override
    pub fn is_legal_move_with(
        &self,
        pieces: &[Piece],
        piece: PieceId,
        to: (u8, u8),
        ignore_turn: bool,
    ) -> bool {
        rules::is_legal_move(pieces, piece, to, &self.context(ignore_turn))
    }

    /// Legal destinations for one piece on this turn (empty for the side not to move)
    pub fn legal_destinations(&self, pieces: &[Piece], piece: PieceId) -> Vec<(u8, u8)> {
        rules::legal_destinations(pieces, piece, &self.context(false))
    }

    pub fn square_is_attacked(
        &self,
        pos: (u8, u8),
        defending_color: PieceColor,
        pieces: &[Piece],
    ) -> bool {
        rules::square_is_attacked(pos, defending_color, pieces)
    }

    pub fn king_in_check(&self, color: PieceColor, pieces: &[Piece]) -> bool {
        if rules::find_king(color, pieces).is_none() {
            warn!("[GAME] No {} king on the board; treating as not in check", color);
            return false;
        }
        rules::king_in_check(color, pieces)
    }

    /// Whether `color` has any legal move, regardless of whose turn it is
    pub fn has_any_legal_move(&self, color: PieceColor, pieces: &[Piece]) -> bool {
        rules::has_any_legal_move(color, pieces, self.en_passant.as_ref())
    }

    pub fn is_checkmate(&self, color: PieceColor, pieces: &[Piece]) -> bool {
        self.king_in_check(color, pieces) && !self.has_any_legal_move(color, pieces)
    }

    pub fn is_stalemate(&self, color: PieceColor, pieces: &[Piece]) -> bool {
        !self.king_in_check(color, pieces) && !self.has_any_legal_move(color, pieces)
    }

    /// Check / checkmate / stalemate classification for `color`
    pub fn game_phase(&self, color: PieceColor, pieces: &[Piece]) -> GamePhase {
        let in_check = self.king_in_check(color, pieces);
        let has_moves = self.has_any_legal_move(color, pieces);
        match (in_check, has_moves) {
            (true, true) => GamePhase::Check,
            (true, false) => GamePhase::Checkmate,
            (false, false) => GamePhase::Stalemate,
            (false, true) => GamePhase::Playing,
        }
    }
}
