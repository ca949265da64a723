//! Turn tracking
//!
//! Tracks whose turn it is and the full-move counter. The rules never toggle
//! the turn themselves; the caller calls [`CurrentTurn::switch`] exactly once
//! after each accepted half-move.
//!
//! # Turn Flow
//!
//! ```text
//! Move 1: White plays → switch() → Black plays → switch() → Move 2: White plays
//! ```

use crate::game::components::PieceColor;
use serde::{Deserialize, Serialize};

/// Whose turn it is and the current move number
///
/// Move numbers follow standard notation: a "move" is White's half-move plus
/// Black's reply, so the number increments when Black hands the turn back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentTurn {
    pub color: PieceColor,
    pub move_number: u32,
}

impl Default for CurrentTurn {
    fn default() -> Self {
        Self {
            color: PieceColor::White,
            move_number: 1,
        }
    }
}

impl CurrentTurn {
    pub fn starting_with(color: PieceColor) -> Self {
        Self {
            color,
            move_number: 1,
        }
    }

    /// Switch to the other player's turn
    pub fn switch(&mut self) {
        self.color = match self.color {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => {
                self.move_number += 1;
                PieceColor::White
            }
        };
    }

    pub fn is_white(&self) -> bool {
        self.color == PieceColor::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_turn_default() {
        //! Games start with White to move on move 1
        let turn = CurrentTurn::default();
        assert_eq!(turn.color, PieceColor::White);
        assert_eq!(turn.move_number, 1);
        assert!(turn.is_white());
    }

    #[test]
    fn test_turn_switch_white_to_black() {
        let mut turn = CurrentTurn::default();
        turn.switch();

        assert_eq!(turn.color, PieceColor::Black);
        assert_eq!(
            turn.move_number, 1,
            "Move number should not increment when White switches to Black"
        );
    }

    #[test]
    fn test_turn_switch_black_to_white() {
        let mut turn = CurrentTurn::starting_with(PieceColor::Black);
        turn.switch();

        assert_eq!(turn.color, PieceColor::White);
        assert_eq!(
            turn.move_number, 2,
            "Move number should increment when Black completes their turn"
        );
    }
}
