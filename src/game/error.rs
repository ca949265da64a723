//! Error types for game module
//!
//! The rule predicates never fail; these errors come from the session's
//! mutation API when a caller asks it to apply or undo a move.

use crate::game::components::PieceKind;
use crate::game::notation::NotationError;
use crate::game::resources::GameOverState;

/// Errors that can occur while driving a game session
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Move rejected by the legality gate
    #[error("Invalid move: {message}")]
    InvalidMove { message: String },

    /// No piece on the source square
    #[error("Piece not found at position ({x}, {y})")]
    PieceNotFound { x: u8, y: u8 },

    /// Promotion to a kind a pawn cannot become
    #[error("Cannot promote to {kind:?}")]
    InvalidPromotion { kind: PieceKind },

    /// The game has already ended
    #[error("Game is over: {}", state.message())]
    GameOver { state: GameOverState },

    /// Nothing left to undo, or undo is disabled
    #[error("Nothing to undo")]
    NothingToUndo,

    /// Malformed coordinate move
    #[error(transparent)]
    Notation(#[from] NotationError),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
