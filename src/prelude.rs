//! Common types re-exported for convenience.

pub use crate::board::piece::Piece;
pub use crate::board::square::{Square, Step};
pub use crate::board::{Board, Placement};
pub use crate::game::config::{GameConfig, PlayerKind};
pub use crate::game::{Game, GameEnding, GameError, TurnChange};
pub use crate::reversi_move::Move;
pub use crate::search::{choose_move, SearchError, Searcher};
