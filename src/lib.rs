pub mod board;
pub mod evaluate;
pub mod game;
pub mod prelude;
pub mod reversi_move;
pub mod search;
