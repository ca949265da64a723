//! Chess rules module - pure game logic over a borrowed piece list
//!
//! Every entry point takes the full position set (`&[Piece]`) and rebuilds
//! the board index from it, so no cached state can go stale between calls.
//!
//! # Module Structure
//!
//! - `board_state` - 8x8 occupancy index rebuilt per query
//! - `piece_moves` - geometric movement rules per piece kind, incl. castling and en passant
//! - `attacks` - attack oracle and check detection
//! - `legality` - legality gate, move planning and self-check simulation

pub mod attacks;
pub mod board_state;
pub mod legality;
pub mod piece_moves;


pub use attacks::{find_king, king_in_check, square_is_attacked};
pub use board_state::BoardState;
pub use legality::{
    has_any_legal_move, is_legal_move, legal_destinations, simulate_move, MoveContext, MovePlan,
};
pub use piece_moves::{get_possible_moves, is_valid_move};
