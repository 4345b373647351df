//! Turn bookkeeping around the board: who moves next, passes, the end of the
//! game, and the in-memory game log.

pub mod config;
pub mod display;
pub mod input_source;
pub mod r#loop;
pub mod renderer;

use log::{info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::board::error::BoardError;
use crate::board::piece::Piece;
use crate::board::square::Square;
use crate::board::Board;
use crate::reversi_move::Move;
use crate::search::{SearchError, SearchStats, Searcher};

use self::config::{ConfigError, GameConfig};
use self::input_source::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnding {
    Winner(Piece),
    Tie,
}

/// What happened to the turn after a move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnChange {
    /// The opponent moves next.
    Next(Piece),
    /// The opponent had no legal move, so the same color moves again.
    Pass { passed: Piece },
    GameOver,
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error("{square} is not a legal move")]
    IllegalMove { square: Square },
    #[error("the game is over")]
    GameOver,
    #[error("Board error: {error}")]
    BoardError {
        #[from]
        error: BoardError,
    },
    #[error("Search error: {error}")]
    SearchError {
        #[from]
        error: SearchError,
    },
    #[error("Config error: {error}")]
    ConfigError {
        #[from]
        error: ConfigError,
    },
    #[error("Input error: {error}")]
    InputError {
        #[from]
        error: InputError,
    },
}

/// The authoritative game: the board, the side to move and the log of every
/// position reached, one line per applied move.
pub struct Game {
    board: Board,
    turn: Piece,
    log: Vec<String>,
    last_move: Option<Move>,
    searcher: Searcher,
    deterministic: bool,
}

impl Game {
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        if let Err(error) = config.validate() {
            warn!("rejecting game config: {}", error);
            return Err(error.into());
        }
        Self::with_board(
            Board::new(config.size),
            Piece::Black,
            config.search_depth,
            config.deterministic,
        )
    }

    /// Starts a game from an arbitrary position with `turn` to move. If `turn`
    /// has no legal move but the opponent does, the opponent moves first.
    pub fn with_board(
        board: Board,
        turn: Piece,
        search_depth: u8,
        deterministic: bool,
    ) -> Result<Self, GameError> {
        if !turn.is_player() {
            return Err(BoardError::EmptyPiece.into());
        }

        let mut turn = turn;
        let opponent_can_move = !board.possible_moves(turn.opponent()).is_empty();
        if board.possible_moves(turn).is_empty() && opponent_can_move {
            info!("{} has no legal move and passes", turn);
            turn = turn.opponent();
        }

        let log = vec![board.to_log_line()];
        Ok(Self {
            board,
            turn,
            log,
            last_move: None,
            searcher: Searcher::new(search_depth),
            deterministic,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Piece {
        self.turn
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.last_move.as_ref()
    }

    pub fn search_stats(&self) -> SearchStats {
        self.searcher.stats()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.board.possible_moves(self.turn)
    }

    /// The game ends when the board is full or neither color can move.
    pub fn is_over(&self) -> bool {
        !self.board.can_play()
            || Piece::PLAYERS
                .iter()
                .all(|&color| self.board.possible_moves(color).is_empty())
    }

    pub fn outcome(&self) -> Option<GameEnding> {
        if !self.is_over() {
            return None;
        }
        match self.board.result() {
            Piece::Empty => Some(GameEnding::Tie),
            winner => Some(GameEnding::Winner(winner)),
        }
    }

    /// Plays the side to move on `square`, if that is a legal move.
    pub fn play_square(&mut self, square: Square) -> Result<TurnChange, GameError> {
        let reversi_move = self
            .board
            .move_at(square, self.turn)
            .ok_or(GameError::IllegalMove { square })?;
        self.play_move(reversi_move)
    }

    /// Lets the searcher pick and play a move for the side to move.
    pub fn play_best_move(&mut self) -> Result<TurnChange, GameError> {
        self.ensure_not_over()?;
        let reversi_move = self
            .searcher
            .choose_move(&self.board, self.turn, self.deterministic)?;
        self.play_move(reversi_move)
    }

    /// Plays a uniformly chosen legal move for the side to move.
    pub fn play_random_move<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<TurnChange, GameError> {
        self.ensure_not_over()?;
        let reversi_move = self
            .legal_moves()
            .choose(rng)
            .cloned()
            .ok_or(SearchError::NoAvailableMoves)?;
        self.play_move(reversi_move)
    }

    /// Applies a move for the side to move, records it in the log and hands
    /// the turn on.
    pub fn play_move(&mut self, reversi_move: Move) -> Result<TurnChange, GameError> {
        self.ensure_not_over()?;
        if reversi_move.piece != self.turn
            || self.board.move_at(reversi_move.square, self.turn).as_ref() != Some(&reversi_move)
        {
            return Err(GameError::IllegalMove {
                square: reversi_move.square,
            });
        }

        self.board.place_piece(&reversi_move)?;
        info!("{} played {}", self.turn, reversi_move);

        self.log.push(self.board.to_log_line());
        self.last_move = Some(reversi_move);

        Ok(self.advance_turn())
    }

    fn advance_turn(&mut self) -> TurnChange {
        if self.is_over() {
            let (black, white) = self.board.player_scores();
            info!("game over, black {} white {}", black, white);
            return TurnChange::GameOver;
        }

        let opponent = self.turn.opponent();
        if self.board.possible_moves(opponent).is_empty() {
            info!("{} has no legal move and passes", opponent);
            return TurnChange::Pass { passed: opponent };
        }

        self.turn = opponent;
        TurnChange::Next(opponent)
    }

    fn ensure_not_over(&self) -> Result<(), GameError> {
        if self.is_over() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}
