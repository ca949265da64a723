//! Game phase and move records

use super::piece::{PieceColor, PieceKind};
use serde::{Deserialize, Serialize};

/// Phase of the game as seen by the side to move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    Check,
    Checkmate,
    Stalemate,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Checkmate | GamePhase::Stalemate)
    }
}

/// Record of one accepted half-move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece_kind: PieceKind,
    pub piece_color: PieceColor,
    pub from: (u8, u8),
    pub to: (u8, u8),
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
    pub is_castling: bool,
    pub is_en_passant: bool,
    pub is_check: bool,
    pub is_checkmate: bool,
}
