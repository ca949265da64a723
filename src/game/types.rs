//! Board coordinate newtypes
//!
//! The rules work on raw `(file, rank)` tuples; these types add algebraic
//! naming (`e4`) for the notation surface and for log output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// File (column) on the chessboard, 0 = 'a' through 7 = 'h'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct File(pub u8);

impl File {
    /// Create a file from a character ('a'..='h')
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Some(File(c as u8 - b'a')),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    pub fn index(self) -> u8 {
        self.0
    }
}

impl From<u8> for File {
    fn from(value: u8) -> Self {
        assert!(value < 8, "File must be in range 0-7");
        File(value)
    }
}

/// Rank (row) on the chessboard, 0 = rank 1 through 7 = rank 8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    /// Create a rank from its printed number (1-8)
    pub fn from_number(n: u8) -> Option<Self> {
        if (1..=8).contains(&n) {
            Some(Rank(n - 1))
        } else {
            None
        }
    }

    pub fn to_number(self) -> u8 {
        self.0 + 1
    }

    pub fn index(self) -> u8 {
        self.0
    }
}

impl From<u8> for Rank {
    fn from(value: u8) -> Self {
        assert!(value < 8, "Rank must be in range 0-7");
        Rank(value)
    }
}

/// Board square (file, rank)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub file: File,
    pub rank: Rank,
}

impl Square {
    /// Create a square from file and rank indices
    ///
    /// # Panics
    ///
    /// Panics if either index is outside 0-7; use [`Square::try_new`] for
    /// untrusted input.
    pub fn new(file: u8, rank: u8) -> Self {
        Square {
            file: File::from(file),
            rank: Rank::from(rank),
        }
    }

    pub fn try_new(file: u8, rank: u8) -> Option<Self> {
        (file < 8 && rank < 8).then(|| Square {
            file: File(file),
            rank: Rank(rank),
        })
    }

    /// Parse algebraic notation such as `e4`
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file_char = chars.next()?;
        let rank_char = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let rank_num = rank_char.to_digit(10)? as u8;

        Some(Square {
            file: File::from_char(file_char)?,
            rank: Rank::from_number(rank_num)?,
        })
    }

    pub fn to_algebraic(self) -> String {
        self.to_string()
    }

    pub fn to_tuple(self) -> (u8, u8) {
        (self.file.index(), self.rank.index())
    }

    pub fn from_tuple((x, y): (u8, u8)) -> Self {
        Square::new(x, y)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file.to_char(), self.rank.to_number())
    }
}

impl From<Square> for (u8, u8) {
    fn from(square: Square) -> Self {
        square.to_tuple()
    }
}
