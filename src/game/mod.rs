//! Chess game logic module
//!
//! # Module Organization
//!
//! - `components` - plain data: pieces, game phase, move records
//! - `resources` - per-game mutable state: turn, en-passant window, outcome, history
//! - `rules` - pure move validation, attack oracle and self-check simulation
//! - `logic` - [`GameLogic`], the turn/en-passant holder and checkmate/stalemate queries
//! - `session` - [`GameSession`], a caller-owned game that applies decided moves
//! - `notation` - coordinate move notation (`e2e4`, `e7e8q`)
//! - `types` - `File`/`Rank`/`Square` newtypes
//!
//! # Data Flow
//!
//! ```text
//! caller pieces + candidate move
//!   → BoardState::rebuild → piece_moves (geometry) → legality (turn + simulation)
//!   → attacks (is own king attacked?) → GameLogic (checkmate / stalemate)
//! ```

pub mod components;
pub mod error;
pub mod logic;
pub mod notation;
pub mod resources;
pub mod rules;
pub mod session;
pub mod types;

pub use error::{GameError, GameResult};
pub use logic::GameLogic;
pub use session::GameSession;
