pub mod core;
pub mod game;

pub use crate::core::GameSettings;
pub use game::components::{GamePhase, MoveRecord, Piece, PieceColor, PieceId, PieceKind};
pub use game::notation::CoordinateMove;
pub use game::resources::{EnPassantTarget, GameOverState};
pub use game::{GameError, GameLogic, GameResult, GameSession};
