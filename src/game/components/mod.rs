//! Plain data types shared by the rules and the session

pub mod game_state;
pub mod piece;


pub use game_state::{GamePhase, MoveRecord};
pub use piece::{standard_position, Piece, PieceColor, PieceId, PieceKind};
