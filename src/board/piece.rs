use std::fmt;
use std::str::FromStr;

/// The state of a single cell. The discriminants are the signed values summed
/// by `Board::result`: a positive total means White leads, negative means Black.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Piece {
    Black = -1,
    Empty = 0,
    White = 1,
}

impl Piece {
    pub const PLAYERS: [Piece; 2] = [Piece::Black, Piece::White];

    /// Returns the other player's color. `Empty` has no opponent and maps to itself.
    pub fn opponent(&self) -> Self {
        match self {
            Piece::Black => Piece::White,
            Piece::White => Piece::Black,
            Piece::Empty => Piece::Empty,
        }
    }

    pub fn value(&self) -> i32 {
        *self as i32
    }

    pub fn is_player(&self) -> bool {
        *self != Piece::Empty
    }

    /// Single character used in the game log.
    pub fn to_log_char(&self) -> char {
        match self {
            Piece::Black => 'B',
            Piece::White => 'W',
            Piece::Empty => '_',
        }
    }

    pub fn to_unicode_char(&self) -> char {
        match self {
            Piece::Black => '●',
            Piece::White => '○',
            Piece::Empty => '·',
        }
    }

    pub fn from_log_char(c: char) -> Option<Self> {
        match c {
            'B' | 'b' => Some(Piece::Black),
            'W' | 'w' => Some(Piece::White),
            '_' | '.' => Some(Piece::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let piece_str = match self {
            Piece::Black => "black",
            Piece::White => "white",
            Piece::Empty => "empty",
        };
        write!(f, "{}", piece_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Piece {
    type Err = ParseError;
    fn from_str(color: &str) -> Result<Self, Self::Err> {
        match color {
            "black" => Ok(Piece::Black),
            "white" => Ok(Piece::White),
            _ => Err("invalid color; options are: black, white"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Piece::Black.opponent(), Piece::White);
        assert_eq!(Piece::White.opponent(), Piece::Black);
        assert_eq!(Piece::Empty.opponent(), Piece::Empty);
    }

    #[test]
    fn test_signed_values() {
        assert_eq!(Piece::Black.value(), -1);
        assert_eq!(Piece::Empty.value(), 0);
        assert_eq!(Piece::White.value(), 1);
    }

    #[test]
    fn test_log_chars() {
        for piece in [Piece::Black, Piece::White, Piece::Empty] {
            assert_eq!(Piece::from_log_char(piece.to_log_char()), Some(piece));
        }
        assert_eq!(Piece::from_log_char('x'), None);
    }

    #[test]
    fn test_parse_colors() {
        assert_eq!(Piece::Black, Piece::from_str("black").unwrap());
        assert_eq!(Piece::White, Piece::from_str("white").unwrap());
        assert!(Piece::from_str("empty").is_err());
    }
}
