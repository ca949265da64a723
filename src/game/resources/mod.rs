//! Mutable per-game state owned by the caller's session
//!
//! - [`CurrentTurn`] - whose turn it is, toggled once per accepted half-move
//! - [`EnPassantTarget`] - the one-half-move en-passant window
//! - [`GameOverState`] - terminal outcome
//! - [`MoveHistory`] - accepted moves, exportable as coordinate notation

pub mod en_passant;
pub mod game_over;
pub mod history;
pub mod turn;


pub use en_passant::EnPassantTarget;
pub use game_over::GameOverState;
pub use history::MoveHistory;
pub use turn::CurrentTurn;
