//! A candidate or applied disc placement.

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

use crate::board::piece::Piece;
use crate::board::square::{Square, Step};

pub type Directions = SmallVec<[Step; 8]>;

/// A legal placement of `piece` on `square`. `value` is the total number of
/// opponent discs flipped across every entry of `directions`, each of which was
/// validated as a sandwich when the move was generated.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub square: Square,
    pub piece: Piece,
    pub value: u32,
    pub directions: Directions,
}

impl Move {
    pub fn new(square: Square, piece: Piece, value: u32, directions: Directions) -> Self {
        Self {
            square,
            piece,
            value,
            directions,
        }
    }
}

/// Moves rank by flip count, highest first, then by square ascending. The
/// remaining fields only break ties between moves that would never appear in
/// the same candidate list, keeping `Ord` consistent with `Eq`.
impl Ord for Move {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .value
            .cmp(&self.value)
            .then_with(|| self.square.cmp(&other.square))
            .then_with(|| self.piece.cmp(&other.piece))
            .then_with(|| self.directions.cmp(&other.directions))
    }
}

impl PartialOrd for Move {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (flips {})", self.piece, self.square, self.value)
    }
}
