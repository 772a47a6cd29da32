use super::Board;
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size() {
            write!(f, "{:>2}", col)?;
        }
        writeln!(f)?;

        for row in 0..self.size() {
            write!(f, "{:>2} ", row)?;
            for col in 0..self.size() {
                let symbol = self.cell(row, col).map_or('.', |color| color.symbol());
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }

        let (white, black) = self.tile_counts();
        write!(f, "{} to move (black: {}, white: {})", self.turn(), black, white)
    }
}

/// Builds a `Board` from an ascii grid, one token row per line:
///
/// ```ignore
/// let board = reversi_position! {
///     ....
///     .BW.
///     .WB.
///     ....
/// };
/// ```
///
/// `B` is a black tile, `W` a white tile and `.` an empty square. Black is to
/// move; call `set_turn` on the result to change that.
#[macro_export]
macro_rules! reversi_position {
    ($($tile:tt)*) => {{
        // Convert all input tokens to a string and filter out whitespace characters.
        let tiles: Vec<char> = stringify!($($tile)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        let size = (tiles.len() as f64).sqrt() as usize;
        assert_eq!(size * size, tiles.len(), "Board must be square, got {} squares", tiles.len());
        let rows: Vec<String> = tiles
            .chunks(size)
            .map(|row| row.iter().collect())
            .collect();
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        $crate::board::Board::from_rows(&rows, $crate::board::color::Color::Black).unwrap()
    }};
}
