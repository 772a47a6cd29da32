//! Positional coin values for each square. Corners are worth the most; the
//! squares touching a corner are penalized because they tend to hand the
//! corner to the opponent.

const TABLE_SIZE: usize = 10;

#[rustfmt::skip]
const WEIGHT_BOARD_10_10: [[i32; TABLE_SIZE]; TABLE_SIZE] = [
    [20, -3, 11,  8,  6,  6,  8, 11, -3, 20],
    [-3,  7, -4,  1,  1,  1,  1, -4, -7, -3],
    [-1,  5, -2,  1,  1,  1,  1, -2,  5, -1],
    [11, -4,  3,  2,  2,  2,  2,  3, -4, 11],
    [ 8,  1,  2, -3, -3, -3, -3,  2,  1,  8],
    [ 8,  1,  2, -3, -3, -3, -3,  2,  1,  8],
    [11, -4,  3,  2,  2,  2,  2,  3, -4, 11],
    [-1,  5, -2,  1,  1,  1,  1, -2,  5, -1],
    [-3,  7, -4,  1,  1,  1,  1, -4, -7, -3],
    [20, -3, 11,  8,  6,  6,  8, 11, -3, 20],
];

/// Weight of `(row, col)` on a `size`x`size` board.
///
/// On a 10x10 board this is the table itself. Other sizes keep the edge
/// bands of the table: the first (and last) five rows and columns map onto
/// the table's outer rings, so corners always read as corners.
pub fn weight(size: usize, row: usize, col: usize) -> i32 {
    WEIGHT_BOARD_10_10[table_index(size, row)][table_index(size, col)]
}

fn table_index(size: usize, i: usize) -> usize {
    let half = TABLE_SIZE / 2;
    if size == TABLE_SIZE {
        i
    } else if i < size / 2 {
        i.min(half - 1)
    } else {
        TABLE_SIZE - 1 - (size - 1 - i).min(half - 1)
    }
}
