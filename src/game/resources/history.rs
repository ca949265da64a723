//! Move history

use crate::game::components::MoveRecord;
use crate::game::notation::CoordinateMove;
use crate::game::types::Square;

/// Accepted half-moves in play order
#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    pub moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Drop everything after the first `len` moves
    pub fn truncate(&mut self, len: usize) {
        self.moves.truncate(len);
    }

    /// The history in coordinate notation, e.g. `e2e4 e7e5 g1f3`
    ///
    /// This is the move list handed to an external engine after
    /// `position startpos moves`.
    pub fn to_coordinate_string(&self) -> String {
        self.moves
            .iter()
            .map(|record| {
                CoordinateMove {
                    from: Square::from_tuple(record.from),
                    to: Square::from_tuple(record.to),
                    promotion: record.promotion,
                }
                .to_string()
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
