//! En-passant target memory

use serde::{Deserialize, Serialize};

/// The square passed over by a pawn's two-square advance, valid for one half-move
///
/// `target` is where an adjacent enemy pawn lands when capturing en passant;
/// `pawn` is where the vulnerable pawn stands (and is removed from).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnPassantTarget {
    pub target: (u8, u8),
    pub pawn: (u8, u8),
}

impl EnPassantTarget {
    /// Target left behind by a pawn that moved two ranks from `from` to `to`
    ///
    /// Returns `None` unless the move is a straight two-rank advance.
    pub fn from_double_step(from: (u8, u8), to: (u8, u8)) -> Option<Self> {
        if from.0 != to.0 || from.1.abs_diff(to.1) != 2 {
            return None;
        }
        Some(Self {
            target: (from.0, (from.1 + to.1) / 2),
            pawn: to,
        })
    }
}
