//! Coordinate move notation
//!
//! Moves are exchanged with move-suggestion processes as
//! `<from-file><from-rank><to-file><to-rank>[promotion]`, e.g. `e2e4` or
//! `e7e8q`. The rules themselves never see these strings; the session and
//! engine adapters translate at the boundary.

use crate::game::components::PieceKind;
use crate::game::types::Square;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Move '{0}' must be 4 or 5 characters long")]
    InvalidLength(String),

    #[error("Invalid square '{0}'")]
    InvalidSquare(String),

    #[error("Invalid promotion piece '{0}' (expected one of q, r, b, n)")]
    InvalidPromotion(char),
}

/// A move in coordinate notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordinateMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl CoordinateMove {
    pub fn new(from: (u8, u8), to: (u8, u8)) -> Option<Self> {
        Some(Self {
            from: Square::try_new(from.0, from.1)?,
            to: Square::try_new(to.0, to.1)?,
            promotion: None,
        })
    }

    pub fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self
    }
}

impl FromStr for CoordinateMove {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(NotationError::InvalidLength(s.to_string()));
        }

        let parse_square = |part: &str| {
            Square::from_algebraic(part).ok_or_else(|| NotationError::InvalidSquare(part.to_string()))
        };
        let from = parse_square(&s[0..2])?;
        let to = parse_square(&s[2..4])?;

        let promotion = match s[4..].chars().next() {
            Some(c) => Some(PieceKind::from_promotion_char(c).ok_or(NotationError::InvalidPromotion(c))?),
            None => None,
        };

        Ok(Self { from, to, promotion })
    }
}

impl fmt::Display for CoordinateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(c) = self.promotion.and_then(PieceKind::promotion_char) {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
