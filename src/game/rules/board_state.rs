//! Board state representation for move validation
//!
//! An 8x8 occupancy index derived from a position set. It is rebuilt from
//! scratch at every validation entry point and never kept between calls, so
//! it can't drift from the pieces it was built from.

use crate::game::components::{Piece, PieceColor, PieceId};

/// Dense `(file, rank) -> piece` lookup over a borrowed position set
pub struct BoardState<'a> {
    pieces: &'a [Piece],
    squares: [[Option<PieceId>; 8]; 8],
}

impl<'a> BoardState<'a> {
    /// Index every piece by its square
    ///
    /// Pieces sharing a square are a caller contract violation; the later
    /// slot wins.
    pub fn rebuild(pieces: &'a [Piece]) -> Self {
        let mut squares = [[None; 8]; 8];
        for (i, piece) in pieces.iter().enumerate() {
            debug_assert!(
                piece.file < 8 && piece.rank < 8,
                "piece {:?} is off the board",
                piece
            );
            if let Some(slot) = squares
                .get_mut(piece.file as usize)
                .and_then(|column| column.get_mut(piece.rank as usize))
            {
                *slot = Some(PieceId(i));
            }
        }
        Self { pieces, squares }
    }

    pub fn pieces(&self) -> &'a [Piece] {
        self.pieces
    }

    pub fn piece(&self, id: PieceId) -> Option<&'a Piece> {
        self.pieces.get(id.index())
    }

    pub fn id_at(&self, pos: (u8, u8)) -> Option<PieceId> {
        if pos.0 > 7 || pos.1 > 7 {
            return None;
        }
        self.squares[pos.0 as usize][pos.1 as usize]
    }

    pub fn get_piece_at(&self, pos: (u8, u8)) -> Option<&'a Piece> {
        self.id_at(pos).and_then(|id| self.piece(id))
    }

    pub fn is_empty(&self, pos: (u8, u8)) -> bool {
        self.id_at(pos).is_none()
    }

    pub fn get_piece_color(&self, pos: (u8, u8)) -> Option<PieceColor> {
        self.get_piece_at(pos).map(|piece| piece.color)
    }

    /// True when every square strictly between `from` and `to` is empty
    ///
    /// Only meaningful for squares on a shared file, rank or diagonal.
    pub fn is_path_clear(&self, from: (u8, u8), to: (u8, u8)) -> bool {
        let dx = (to.0 as i8 - from.0 as i8).signum();
        let dy = (to.1 as i8 - from.1 as i8).signum();

        let mut x = from.0 as i8 + dx;
        let mut y = from.1 as i8 + dy;

        while (x, y) != (to.0 as i8, to.1 as i8) {
            if !self.is_empty((x as u8, y as u8)) {
                return false;
            }
            x += dx;
            y += dy;
        }

        true
    }
}
