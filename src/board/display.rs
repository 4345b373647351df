use std::fmt;

use super::square::Square;
use super::Board;

impl Board {
    /// Renders the grid with column numbers on top and row numbers on the left.
    pub fn to_grid(&self) -> String {
        let size = self.size as i32;
        let mut buffer = String::with_capacity((self.size + 1) * (self.size * 2 + 4));

        buffer.push_str("   ");
        for x in 0..size {
            buffer.push_str(&format!("{} ", x));
        }
        buffer.push('\n');

        for y in 0..size {
            buffer.push_str(&format!("{:>2} ", y));
            for x in 0..size {
                let piece = self.cells[Square::new(x, y).index(self.size)];
                buffer.push(piece.to_unicode_char());
                buffer.push(' ');
            }
            buffer.push('\n');
        }

        buffer
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_grid())
    }
}

/// Builds a `Board` from a square grid of `B`, `W` and `.` cells, written top
/// row first. The side length is inferred from the number of cells.
#[macro_export]
macro_rules! reversi_position {
    ($($cell:tt)*) => {{
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<char> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        let size = (cells.len() as f64).sqrt() as usize;
        assert_eq!(
            size * size,
            cells.len(),
            "Invalid number of squares. Expected a square grid, got {}",
            cells.len()
        );
        let rows: Vec<String> = cells
            .chunks(size)
            .map(|row| row.iter().collect())
            .collect();
        $crate::board::Board::from_rows(&rows).expect("invalid reversi position")
    }};
}

#[cfg(test)]
mod tests {
    use crate::board::Board;

    #[test]
    fn test_render_opening_grid() {
        let board = Board::new(4);
        let expected = "   0 1 2 3 \n 0 · · · · \n 1 · ○ ● · \n 2 · ● ○ · \n 3 · · · · \n";
        assert_eq!(board.to_grid(), expected);
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_position_macro() {
        let board = reversi_position! {
            . . . .
            . W B .
            . B W .
            . . . .
        };
        assert_eq!(board, Board::new(4));
    }
}
