use crate::board::square::Square;

pub const CORNER_WEIGHT: i32 = 20;
pub const EDGE_WEIGHT: i32 = 5;
pub const CORNER_NEIGHBOR_WEIGHT: i32 = -5;

/// Static desirability of a cell on a board of the given size. Corners are
/// prized, the cells touching a corner (orthogonally or diagonally) give it
/// away, the rest of the rim is mildly good and the interior is neutral.
pub fn square_weight(square: Square, size: usize) -> i32 {
    let last = size as i32 - 1;
    let on_rim = |v: i32| v == 0 || v == last;
    let near_rim = |v: i32| v <= 1 || v >= last - 1;

    if on_rim(square.x) && on_rim(square.y) {
        return CORNER_WEIGHT;
    }

    // Within one step of a corner in both axes.
    let corner_x = if square.x <= 1 { 0 } else { last };
    let corner_y = if square.y <= 1 { 0 } else { last };
    if near_rim(square.x)
        && near_rim(square.y)
        && (square.x - corner_x).abs() <= 1
        && (square.y - corner_y).abs() <= 1
    {
        return CORNER_NEIGHBOR_WEIGHT;
    }

    if on_rim(square.x) || on_rim(square.y) {
        return EDGE_WEIGHT;
    }

    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(size: usize) -> Vec<Vec<i32>> {
        (0..size as i32)
            .map(|y| {
                (0..size as i32)
                    .map(|x| square_weight(Square::new(x, y), size))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_weights_8x8() {
        let expected = vec![
            vec![20, -5, 5, 5, 5, 5, -5, 20],
            vec![-5, -5, 0, 0, 0, 0, -5, -5],
            vec![5, 0, 0, 0, 0, 0, 0, 5],
            vec![5, 0, 0, 0, 0, 0, 0, 5],
            vec![5, 0, 0, 0, 0, 0, 0, 5],
            vec![5, 0, 0, 0, 0, 0, 0, 5],
            vec![-5, -5, 0, 0, 0, 0, -5, -5],
            vec![20, -5, 5, 5, 5, 5, -5, 20],
        ];
        assert_eq!(table(8), expected);
    }

    #[test]
    fn test_weights_4x4_have_no_plain_edges() {
        let expected = vec![
            vec![20, -5, -5, 20],
            vec![-5, -5, -5, -5],
            vec![-5, -5, -5, -5],
            vec![20, -5, -5, 20],
        ];
        assert_eq!(table(4), expected);
    }

    #[test]
    fn test_twelve_corner_neighbors_on_large_boards() {
        for size in 5..=10 {
            let count = table(size)
                .iter()
                .flatten()
                .filter(|&&w| w == CORNER_NEIGHBOR_WEIGHT)
                .count();
            assert_eq!(count, 12, "size {}", size);
        }
    }
}
