//! Session settings

use super::error::{CoreError, CoreResult};
use crate::game::components::PieceKind;
use serde::{Deserialize, Serialize};

/// User preferences that shape how a [`crate::game::GameSession`] behaves
///
/// Missing fields in a settings file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Piece a pawn becomes when a move reaches the last rank without naming one
    pub default_promotion: PieceKind,

    /// Whether accepted moves can be taken back
    pub allow_undo: bool,

    /// How many moves can be taken back (0 = unbounded)
    pub max_undo_depth: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            default_promotion: PieceKind::Queen,
            allow_undo: true,
            max_undo_depth: 0,
        }
    }
}

impl GameSettings {
    pub fn validate(&self) -> CoreResult<()> {
        if !self.default_promotion.is_promotion_target() {
            return Err(CoreError::InvalidSettings {
                message: format!(
                    "default_promotion cannot be {:?}",
                    self.default_promotion
                ),
            });
        }
        Ok(())
    }
}
