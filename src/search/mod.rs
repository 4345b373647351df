//! Computer move selection: bounded-depth minimax with alpha-beta pruning.
//!
//! The root tries every legal move for the searching color and scores the
//! resulting position with `Searcher::minimax`, starting on the opponent's
//! (minimizing) ply. Each node is scored from the perspective of the color to
//! move at that ply, so leaves reached on a minimizing ply are evaluated for the
//! opponent. Exploration happens on a single working copy of the board, using
//! `Board::place_piece` and `Board::undo` to walk in and out of each line; the
//! caller's board is never touched.

use std::time::{Duration, Instant};

use log::{debug, trace};
use thiserror::Error;

use crate::board::error::BoardError;
use crate::board::piece::Piece;
use crate::board::Board;
use crate::evaluate;
use crate::reversi_move::Move;


pub const DEFAULT_SEARCH_DEPTH: u8 = 5;

#[derive(Error, Debug, PartialEq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
    #[error("board error: {error}")]
    BoardError {
        #[from]
        error: BoardError,
    },
}

/// Search performance statistics
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub cutoffs: usize,
    pub depth: u8,
    pub last_score: Option<f64>,
    pub last_search_duration: Option<Duration>,
}

pub struct Searcher {
    search_depth: u8,
    searched_position_count: usize,
    cutoff_count: usize,
    last_score: Option<f64>,
    last_search_duration: Option<Duration>,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl Searcher {
    pub fn new(depth: u8) -> Self {
        Self {
            search_depth: depth,
            searched_position_count: 0,
            cutoff_count: 0,
            last_score: None,
            last_search_duration: None,
        }
    }

    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    pub fn cutoff_count(&self) -> usize {
        self.cutoff_count
    }

    pub fn last_score(&self) -> Option<f64> {
        self.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.last_search_duration
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.searched_position_count,
            cutoffs: self.cutoff_count,
            depth: self.search_depth,
            last_score: self.last_score,
            last_search_duration: self.last_search_duration,
        }
    }

    pub fn reset_stats(&mut self) {
        self.searched_position_count = 0;
        self.cutoff_count = 0;
    }

    /// Picks a move for `color`. In deterministic mode the highest ranked legal
    /// move is returned without searching. Otherwise the move with the best
    /// minimax score wins; on equal scores the higher ranked move is kept.
    pub fn choose_move(
        &mut self,
        board: &Board,
        color: Piece,
        deterministic: bool,
    ) -> Result<Move, SearchError> {
        self.reset_stats();

        let mut candidates = board.possible_moves(color);
        if candidates.is_empty() {
            return Err(SearchError::NoAvailableMoves);
        }

        if deterministic {
            self.last_score = None;
            self.last_search_duration = None;
            return Ok(candidates.swap_remove(0));
        }

        if self.search_depth == 0 {
            return Err(SearchError::DepthTooLow);
        }

        let started = Instant::now();
        let mut working = board.clone();
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best: Option<(usize, f64)> = None;

        for (index, candidate) in candidates.iter().enumerate() {
            let placement = working.place_piece(candidate)?;
            let score = self.minimax(
                &mut working,
                color,
                self.search_depth - 1,
                alpha,
                beta,
                false,
            );
            working.undo(&placement)?;
            let score = score?;

            debug!("candidate {} scored {}", candidate, score);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
            alpha = alpha.max(score);
        }

        let (best_index, best_score) = best.ok_or(SearchError::NoAvailableMoves)?;
        let duration = started.elapsed();
        self.last_score = Some(best_score);
        self.last_search_duration = Some(duration);

        debug!(
            "chose {} with score {} after {} positions ({} cutoffs) in {:?}",
            candidates[best_index],
            best_score,
            self.searched_position_count,
            self.cutoff_count,
            duration
        );

        Ok(candidates.swap_remove(best_index))
    }

    /// Scores `board` by searching `depth` more plies. `own_color` is the color
    /// the search is choosing a move for; `maximizing` says whether it is that
    /// color's ply. Positions with no remaining depth, no empty squares, or no
    /// legal move for the side to move are scored directly for the side to move.
    ///
    /// `board` is restored to its original state before returning.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        own_color: Piece,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> Result<f64, SearchError> {
        self.searched_position_count += 1;

        let to_move = if maximizing {
            own_color
        } else {
            own_color.opponent()
        };

        if depth == 0 || !board.can_play() {
            return Ok(evaluate::score(board, to_move));
        }

        let candidates = board.possible_moves(to_move);
        if candidates.is_empty() {
            return Ok(evaluate::score(board, to_move));
        }

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for candidate in &candidates {
            let placement = board.place_piece(candidate)?;
            let score = self.minimax(board, own_color, depth - 1, alpha, beta, !maximizing);
            board.undo(&placement)?;
            let score = score?;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if beta <= alpha {
                trace!("cutoff at depth {} after {}", depth, candidate);
                self.cutoff_count += 1;
                break;
            }
        }

        Ok(best)
    }
}

/// Chooses a move for `color` with a one-off searcher of the given depth.
#[must_use = "search returns the chosen move"]
pub fn choose_move(
    board: &Board,
    color: Piece,
    depth: u8,
    deterministic: bool,
) -> Result<Move, SearchError> {
    Searcher::new(depth).choose_move(board, color, deterministic)
}
