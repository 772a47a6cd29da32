use std::fmt;

use super::color::Color;

/// A ply: either a tile placed at `(row, col)` or a forced pass.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Move {
    Place { color: Color, row: usize, col: usize },
    Pass(Color),
}

impl Move {
    pub fn new(color: Color, row: usize, col: usize) -> Self {
        Move::Place { color, row, col }
    }

    pub fn color(&self) -> Color {
        match *self {
            Move::Place { color, .. } => color,
            Move::Pass(color) => color,
        }
    }

    /// `None` for a pass.
    pub fn coordinates(&self) -> Option<(usize, usize)> {
        match *self {
            Move::Place { row, col, .. } => Some((row, col)),
            Move::Pass(_) => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place { color, row, col } => write!(f, "{} ({}, {})", color, row, col),
            Move::Pass(color) => write!(f, "{} passes", color),
        }
    }
}
