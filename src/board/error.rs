use thiserror::Error;

use super::square::Square;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Cannot place a piece on {square}, the square is already occupied")]
    OccupiedSquare { square: Square },
    #[error("Cannot place a piece on {square}, the square is off the board")]
    OutOfRange { square: Square },
    #[error("Cannot place an empty piece")]
    EmptyPiece,
    #[error("Invalid position: {msg}")]
    InvalidPosition { msg: String },
}
