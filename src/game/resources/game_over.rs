//! Game over state tracking
//!
//! Tracks the terminal conditions the rules can detect: checkmate and
//! stalemate. Both are discovered only after a move completes and the turn
//! has been handed to the opponent.
//!
//! # State Transitions
//!
//! ```text
//! Playing → WhiteWon / BlackWon / Stalemate
//! ```
//!
//! All non-Playing states are terminal.

use crate::game::components::PieceColor;
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum GameOverState {
    /// Game is still in progress
    #[default]
    Playing,

    /// White won by checkmate
    WhiteWon,

    /// Black won by checkmate
    BlackWon,

    /// Draw by stalemate
    ///
    /// The side to move has no legal move but is not in check.
    Stalemate,
}

impl GameOverState {
    /// Outcome when `loser` has been checkmated
    pub fn checkmated(loser: PieceColor) -> Self {
        match loser {
            PieceColor::White => GameOverState::BlackWon,
            PieceColor::Black => GameOverState::WhiteWon,
        }
    }

    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameOverState::Playing)
    }

    /// Human-readable result line
    pub fn message(&self) -> &'static str {
        match self {
            GameOverState::Playing => "Game in progress",
            GameOverState::WhiteWon => "Checkmate! White wins.",
            GameOverState::BlackWon => "Checkmate! Black wins.",
            GameOverState::Stalemate => "Stalemate! The game is a draw.",
        }
    }

    /// Winner of the game, `None` for draws or ongoing games
    pub fn winner(&self) -> Option<PieceColor> {
        match self {
            GameOverState::WhiteWon => Some(PieceColor::White),
            GameOverState::BlackWon => Some(PieceColor::Black),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, GameOverState::Stalemate)
    }

    pub fn is_checkmate(&self) -> bool {
        matches!(self, GameOverState::WhiteWon | GameOverState::BlackWon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_over_state_default() {
        //! Verifies GameOverState defaults to Playing
        let state = GameOverState::default();
        assert_eq!(state, GameOverState::Playing);
        assert!(!state.is_game_over());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_checkmated_awards_opponent() {
        assert_eq!(
            GameOverState::checkmated(PieceColor::White),
            GameOverState::BlackWon
        );
        assert_eq!(
            GameOverState::checkmated(PieceColor::Black),
            GameOverState::WhiteWon
        );
    }

    #[test]
    fn test_winner_and_flags() {
        assert_eq!(GameOverState::WhiteWon.winner(), Some(PieceColor::White));
        assert_eq!(GameOverState::BlackWon.winner(), Some(PieceColor::Black));
        assert_eq!(GameOverState::Stalemate.winner(), None);

        assert!(GameOverState::WhiteWon.is_checkmate());
        assert!(!GameOverState::Stalemate.is_checkmate());
        assert!(GameOverState::Stalemate.is_draw());
        assert!(GameOverState::Stalemate.is_game_over());
    }

    #[test]
    fn test_messages() {
        assert_eq!(GameOverState::BlackWon.message(), "Checkmate! Black wins.");
        assert_eq!(
            GameOverState::Stalemate.message(),
            "Stalemate! The game is a draw."
        );
    }
}
