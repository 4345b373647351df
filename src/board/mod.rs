pub mod error;
pub mod piece;
pub mod square;

mod display;


use std::cmp::Ordering;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::reversi_move::Move;
use error::BoardError;
use piece::Piece;
use square::{Square, Step};

/// Represents the state of a square reversi board. Cells are stored row-major
/// (`y * size + x`), and the set of empty squares is maintained alongside the
/// grid so that move generation only visits candidate cells.
///
/// The board does not validate its size; configuration restricts it to 4..=10.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    size: usize,
    cells: Vec<Piece>,
    empty: FxHashSet<Square>,
}

/// Everything needed to take back a placement: the target square, the color
/// that was placed, and every disc it flipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub square: Square,
    pub piece: Piece,
    pub flipped: Vec<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(8)
    }
}

impl Board {
    /// Creates a board in the opening position: four alternating discs around
    /// the center, White on the diagonal.
    pub fn new(size: usize) -> Self {
        let mut board = Self::empty(size);

        let size = size as i32;
        let row = if size % 2 == 0 {
            (size - 1) / 2
        } else {
            (size - 1) / 2 - 1
        };
        let col = size / 2;

        let layout = [
            (Square::new(row, row), Piece::White),
            (Square::new(col, col), Piece::White),
            (Square::new(row, col), Piece::Black),
            (Square::new(col, row), Piece::Black),
        ];
        for (square, piece) in layout {
            if square.in_bounds(board.size) {
                board.set(square, piece);
            }
        }

        board
    }

    /// Creates a board with no discs on it.
    pub fn empty(size: usize) -> Self {
        let cells = vec![Piece::Empty; size * size];
        let empty = (0..size * size)
            .map(|index| Square::from_index(index, size))
            .collect();
        Self { size, cells, empty }
    }

    /// Builds a board from one string per row, top row first. Each row holds
    /// `size` characters among `B`, `W`, `_` and `.`; whitespace is ignored.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        let size = rows.len();
        let mut board = Self::empty(size);

        for (y, row) in rows.iter().enumerate() {
            let pieces = row
                .as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| {
                    Piece::from_log_char(c).ok_or_else(|| BoardError::InvalidPosition {
                        msg: format!("unexpected character {:?} in row {}", c, y),
                    })
                })
                .collect::<Result<Vec<Piece>, BoardError>>()?;

            if pieces.len() != size {
                return Err(BoardError::InvalidPosition {
                    msg: format!("row {} has {} cells, expected {}", y, pieces.len(), size),
                });
            }

            for (x, piece) in pieces.into_iter().enumerate() {
                board.set(Square::new(x as i32, y as i32), piece);
            }
        }

        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the piece on `square`, or `None` when the square is off the board.
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        if square.in_bounds(self.size) {
            Some(self.cells[square.index(self.size)])
        } else {
            None
        }
    }

    /// Places the move's piece and flips every sandwiched run along the move's
    /// directions. Directions that do not end on the mover's own color are left
    /// untouched.
    pub fn place_piece(&mut self, reversi_move: &Move) -> Result<Placement, BoardError> {
        let square = reversi_move.square;
        let piece = reversi_move.piece;

        match self.get(square) {
            None => return Err(BoardError::OutOfRange { square }),
            Some(Piece::Empty) => (),
            Some(_) => return Err(BoardError::OccupiedSquare { square }),
        }
        if !piece.is_player() {
            return Err(BoardError::EmptyPiece);
        }

        self.set(square, piece);

        let opponent = piece.opponent();
        let mut flipped = Vec::with_capacity(reversi_move.value as usize);
        for &step in &reversi_move.directions {
            let mut run: SmallVec<[Square; 8]> = SmallVec::new();
            let mut current = square + step;
            while self.get(current) == Some(opponent) {
                run.push(current);
                current = current + step;
            }
            if self.get(current) != Some(piece) {
                continue;
            }
            for &target in &run {
                self.set(target, piece);
            }
            flipped.extend(run);
        }

        Ok(Placement {
            square,
            piece,
            flipped,
        })
    }

    /// Takes back a placement made by `place_piece`, restoring flipped discs to
    /// the opponent and the target square to empty.
    pub fn undo(&mut self, placement: &Placement) -> Result<(), BoardError> {
        if self.get(placement.square) != Some(placement.piece) {
            return Err(BoardError::InvalidPosition {
                msg: format!(
                    "cannot undo {} on {}, the square does not hold it",
                    placement.piece, placement.square
                ),
            });
        }

        let opponent = placement.piece.opponent();
        for &square in &placement.flipped {
            self.set(square, opponent);
        }
        self.set(placement.square, Piece::Empty);

        Ok(())
    }

    /// Returns every legal move for `color`, best ranked first (see `Move`'s
    /// ordering). An empty list means `color` has to pass.
    pub fn possible_moves(&self, color: Piece) -> Vec<Move> {
        if !color.is_player() {
            return Vec::new();
        }

        let mut moves: Vec<Move> = self
            .empty
            .iter()
            .filter_map(|&square| self.move_at(square, color))
            .collect();
        moves.sort();
        moves
    }

    /// Returns the move `color` would make on `square`, if it is legal.
    pub fn move_at(&self, square: Square, color: Piece) -> Option<Move> {
        if !color.is_player() || self.get(square) != Some(Piece::Empty) {
            return None;
        }

        let mut value = 0;
        let mut directions = SmallVec::new();
        for &step in &Step::ALL {
            let flips = self.count_flips(square, step, color);
            if flips > 0 {
                value += flips;
                directions.push(step);
            }
        }

        if directions.is_empty() {
            None
        } else {
            Some(Move::new(square, color, value, directions))
        }
    }

    /// Counts the opponent discs `color` would sandwich by playing on `square`
    /// in the direction of `step`. A run that reaches an empty cell or the edge
    /// of the board flips nothing.
    fn count_flips(&self, square: Square, step: Step, color: Piece) -> u32 {
        let opponent = color.opponent();
        let mut current = square + step;
        let mut count = 0;

        while self.get(current) == Some(opponent) {
            count += 1;
            current = current + step;
        }

        if count > 0 && self.get(current) == Some(color) {
            count
        } else {
            0
        }
    }

    /// True while at least one square is empty. This does not mean either
    /// player has a legal move.
    pub fn can_play(&self) -> bool {
        !self.empty.is_empty()
    }

    /// The color holding the majority of discs, or `Empty` on a tie.
    pub fn result(&self) -> Piece {
        let total: i32 = self.cells.iter().map(Piece::value).sum();
        match total.cmp(&0) {
            Ordering::Greater => Piece::White,
            Ordering::Less => Piece::Black,
            Ordering::Equal => Piece::Empty,
        }
    }

    /// Returns `(black, white)` disc counts.
    pub fn player_scores(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(black, white), piece| match piece {
                Piece::Black => (black + 1, white),
                Piece::White => (black, white + 1),
                Piece::Empty => (black, white),
            })
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|&&cell| cell == piece).count()
    }

    pub fn empty_count(&self) -> usize {
        self.empty.len()
    }

    pub fn discs_placed(&self) -> usize {
        self.cells.len() - self.empty.len()
    }

    pub fn corners(&self) -> [Square; 4] {
        let last = self.size as i32 - 1;
        [
            Square::new(0, 0),
            Square::new(last, 0),
            Square::new(0, last),
            Square::new(last, last),
        ]
    }

    pub fn is_corner(&self, square: Square) -> bool {
        self.corners().contains(&square)
    }

    pub fn is_edge(&self, square: Square) -> bool {
        let last = self.size as i32 - 1;
        square.in_bounds(self.size)
            && (square.x == 0 || square.y == 0 || square.x == last || square.y == last)
    }

    /// Iterates every cell as `(square, piece)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, &piece)| (Square::from_index(index, size), piece))
    }

    /// One character per cell, row-major, as recorded in the game log.
    pub fn to_log_line(&self) -> String {
        self.cells.iter().map(Piece::to_log_char).collect()
    }

    fn set(&mut self, square: Square, piece: Piece) {
        let index = square.index(self.size);
        self.cells[index] = piece;
        if piece == Piece::Empty {
            self.empty.insert(square);
        } else {
            self.empty.remove(&square);
        }
    }
}
