use crate::board::piece::Piece;
use crate::board::Board;

use self::square_weights::square_weight;

pub mod square_weights;

const DISC_DIFFERENCE_WEIGHT: f64 = 64.0;
const ENDGAME_FILL_RATIO: f64 = 0.96;

/// How far the game has progressed, judged by the number of discs on the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    discs_placed: usize,
    midgame: usize,
    endgame: usize,
}

impl Phase {
    pub fn of(board: &Board) -> Self {
        let cells = board.size() * board.size();
        Self {
            discs_placed: board.discs_placed(),
            midgame: cells / 3,
            endgame: (cells as f64 * ENDGAME_FILL_RATIO).floor() as usize,
        }
    }

    /// Past the first third of the board: disc counts and parity start to matter.
    pub fn past_midgame(&self) -> bool {
        self.discs_placed > self.midgame
    }

    /// Before the board is nearly full: mobility and square weights still matter.
    pub fn before_endgame(&self) -> bool {
        self.discs_placed < self.endgame
    }
}

/// Returns the desirability of `board` for `color`. Higher is better for `color`.
///
/// The score blends six heuristics, some of which only apply in certain
/// phases of the game:
///
/// | heuristic      | active                 |
/// |----------------|------------------------|
/// | disc difference| past midgame           |
/// | mobility       | before endgame         |
/// | corner control | always                 |
/// | stability      | always                 |
/// | parity         | past midgame           |
/// | square weights | before endgame         |
///
/// Stability and parity are not antisymmetric between the two colors, so
/// `score(b, White)` is only approximately `-score(b, Black)`.
pub fn score(board: &Board, color: Piece) -> f64 {
    let phase = Phase::of(board);
    let mut total = corner_control(board, color) + stability(board, color);

    if phase.past_midgame() {
        total += disc_difference(board, color) + parity(board);
    }

    if phase.before_endgame() {
        total += mobility(board, color) + weighted_squares(board, color);
    }

    total
}

/// Disc count difference, heavily weighted so it dominates once it applies.
pub fn disc_difference(board: &Board, color: Piece) -> f64 {
    let own = board.count(color) as f64;
    let opponent = board.count(color.opponent()) as f64;
    (own - opponent) * DISC_DIFFERENCE_WEIGHT
}

/// Difference in legal move counts, relative to the number of empty squares.
/// A full board has no mobility.
pub fn mobility(board: &Board, color: Piece) -> f64 {
    let empty = board.empty_count();
    if empty == 0 {
        return 0.0;
    }

    let own = board.possible_moves(color).len() as f64;
    let opponent = board.possible_moves(color.opponent()).len() as f64;
    (own - opponent) / empty as f64
}

/// Difference in corners held, as a fraction of the four corners.
pub fn corner_control(board: &Board, color: Piece) -> f64 {
    let (own, opponent) = board
        .corners()
        .iter()
        .fold((0, 0), |(own, opponent), &corner| match board.get(corner) {
            Some(piece) if piece == color => (own + 1, opponent),
            Some(piece) if piece == color.opponent() => (own, opponent + 1),
            _ => (own, opponent),
        });
    (own - opponent) as f64 / 4.0
}

/// A rough proxy for disc stability: discs on corners and edges, where they
/// are harder to flip. Corners count twice since they are also on two edges.
/// The difference is scaled by `color`'s own disc count.
pub fn stability(board: &Board, color: Piece) -> f64 {
    let own_discs = board.count(color);
    if own_discs == 0 {
        return 0.0;
    }

    let anchored = |piece: Piece| -> i32 {
        board
            .cells()
            .filter(|&(_, cell)| cell == piece)
            .map(|(square, _)| board.is_corner(square) as i32 + board.is_edge(square) as i32)
            .sum()
    };

    (anchored(color) - anchored(color.opponent())) as f64 / own_discs as f64
}

/// `+1` when an odd number of squares remain, `-1` otherwise. This ignores
/// which side is to move.
pub fn parity(board: &Board) -> f64 {
    if board.empty_count() % 2 == 1 {
        1.0
    } else {
        -1.0
    }
}

/// Sum of static square weights, own discs minus opponent discs, scaled by board size.
pub fn weighted_squares(board: &Board, color: Piece) -> f64 {
    let size = board.size();
    let opponent = color.opponent();
    let total: i32 = board
        .cells()
        .map(|(square, piece)| {
            if piece == color {
                square_weight(square, size)
            } else if piece == opponent {
                -square_weight(square, size)
            } else {
                0
            }
        })
        .sum();
    total as f64 / (25 * size) as f64
}
