//! Piece registry: color, kind, square and moved-flag of one piece occurrence

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    /// The other side
    pub fn opponent(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Rank step a pawn of this color advances by
    pub fn pawn_direction(self) -> i8 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => -1,
        }
    }

    /// Rank a pawn of this color starts on (double-step rank)
    pub fn pawn_start_rank(self) -> u8 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => 6,
        }
    }

    /// Rank a pawn of this color promotes on
    pub fn promotion_rank(self) -> u8 {
        match self {
            PieceColor::White => 7,
            PieceColor::Black => 0,
        }
    }

    /// Rank the king and rooks of this color start on
    pub fn back_rank(self) -> u8 {
        match self {
            PieceColor::White => 0,
            PieceColor::Black => 7,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => f.write_str("White"),
            PieceColor::Black => f.write_str("Black"),
        }
    }
}

/// The six fixed piece kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    #[default]
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceKind {
    /// Lowercase promotion letter used by coordinate notation (`q`, `r`, `b`, `n`)
    ///
    /// Returns `None` for kinds a pawn cannot promote to.
    pub fn promotion_char(self) -> Option<char> {
        match self {
            PieceKind::Queen => Some('q'),
            PieceKind::Rook => Some('r'),
            PieceKind::Bishop => Some('b'),
            PieceKind::Knight => Some('n'),
            PieceKind::King | PieceKind::Pawn => None,
        }
    }

    /// Inverse of [`PieceKind::promotion_char`]
    pub fn from_promotion_char(c: char) -> Option<Self> {
        match c {
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            _ => None,
        }
    }

    pub fn is_promotion_target(self) -> bool {
        self.promotion_char().is_some()
    }
}

/// Positional slot of a piece inside the position set passed to a query
///
/// Identity is the slot, never the piece value, so two equal-looking pieces
/// can't be confused with each other during simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub usize);

impl PieceId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One piece on the board
///
/// `file` and `rank` are 0-7 (`file` 0 is the a-file, `rank` 0 is White's back rank).
/// Equality compares color, kind and square; `has_moved` is ignored.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Piece {
    pub color: PieceColor,
    pub kind: PieceKind,
    pub file: u8,
    pub rank: u8,
    #[serde(default)]
    pub has_moved: bool,
}

impl Piece {
    pub fn new(color: PieceColor, kind: PieceKind, file: u8, rank: u8) -> Self {
        debug_assert!(file < 8 && rank < 8, "piece placed off the board");
        Self {
            color,
            kind,
            file,
            rank,
            has_moved: false,
        }
    }

    /// Same piece, flagged as having moved before
    pub fn moved(mut self) -> Self {
        self.has_moved = true;
        self
    }

    pub fn position(&self) -> (u8, u8) {
        (self.file, self.rank)
    }

    /// Relocate the piece; the moved-flag flips only when the square changes
    pub fn set_position(&mut self, (file, rank): (u8, u8)) {
        if file != self.file || rank != self.rank {
            self.file = file;
            self.rank = rank;
            self.has_moved = true;
        }
    }

    pub fn is(&self, color: PieceColor, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
            && self.kind == other.kind
            && self.file == other.file
            && self.rank == other.rank
    }
}

impl Eq for Piece {}

/// Back-rank layout shared by both colors
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 32 pieces of the standard starting position
pub fn standard_position() -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(32);
    for color in [PieceColor::White, PieceColor::Black] {
        let back = color.back_rank();
        let pawns = color.pawn_start_rank();
        for (file, kind) in BACK_ROW.iter().enumerate() {
            pieces.push(Piece::new(color, *kind, file as u8, back));
        }
        for file in 0..8 {
            pieces.push(Piece::new(color, PieceKind::Pawn, file, pawns));
        }
    }
    pieces
}
