//! Coordinates and unit directions on the grid.

use std::fmt;
use std::ops::Add;

/// A cell coordinate. Values may fall outside the grid after stepping off an
/// edge; `Board::get` reports such squares as off-board.
///
/// Squares order by `x` first, then `y`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Square {
    pub x: i32,
    pub y: i32,
}

impl Square {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(&self, size: usize) -> bool {
        let size = size as i32;
        self.x >= 0 && self.x < size && self.y >= 0 && self.y < size
    }

    /// Row-major index into a grid of the given size. Callers must check `in_bounds`.
    #[inline]
    pub fn index(&self, size: usize) -> usize {
        self.y as usize * size + self.x as usize
    }

    pub fn from_index(index: usize, size: usize) -> Self {
        Self::new((index % size) as i32, (index / size) as i32)
    }
}

impl Add<Step> for Square {
    type Output = Square;

    fn add(self, step: Step) -> Square {
        Square::new(self.x + step.dx, self.y + step.dy)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the eight unit directions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Step {
    pub dx: i32,
    pub dy: i32,
}

impl Step {
    pub const NORTH_WEST: Step = Step::new(-1, -1);
    pub const NORTH: Step = Step::new(0, -1);
    pub const NORTH_EAST: Step = Step::new(1, -1);
    pub const WEST: Step = Step::new(-1, 0);
    pub const EAST: Step = Step::new(1, 0);
    pub const SOUTH_WEST: Step = Step::new(-1, 1);
    pub const SOUTH: Step = Step::new(0, 1);
    pub const SOUTH_EAST: Step = Step::new(1, 1);

    pub const ALL: [Step; 8] = [
        Step::NORTH_WEST,
        Step::NORTH,
        Step::NORTH_EAST,
        Step::WEST,
        Step::EAST,
        Step::SOUTH_WEST,
        Step::SOUTH,
        Step::SOUTH_EAST,
    ];

    const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_ordering_is_x_then_y() {
        assert!(Square::new(0, 5) < Square::new(1, 0));
        assert!(Square::new(2, 1) < Square::new(2, 3));
        assert_eq!(Square::new(3, 3), Square::new(3, 3));
    }

    #[test]
    fn test_add_step_may_leave_the_grid() {
        let corner = Square::new(0, 0);
        assert_eq!(corner + Step::EAST, Square::new(1, 0));
        let off = corner + Step::NORTH_WEST;
        assert_eq!(off, Square::new(-1, -1));
        assert!(!off.in_bounds(8));
    }

    #[test]
    fn test_index_round_trip() {
        let square = Square::new(3, 2);
        assert_eq!(square.index(6), 15);
        assert_eq!(Square::from_index(15, 6), square);
    }

    #[test]
    fn test_all_steps_are_distinct_units() {
        for (i, a) in Step::ALL.iter().enumerate() {
            assert!(a.dx.abs() <= 1 && a.dy.abs() <= 1);
            assert!(a.dx != 0 || a.dy != 0);
            for b in &Step::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
