use thiserror::Error;

use super::color::Color;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("board size must be even and between {min} and {max}, got {size}")]
    InvalidSize { size: usize, min: usize, max: usize },
    #[error("row {row} has {len} squares, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("it is {expected}'s turn, cannot play a {got} move")]
    WrongTurn { expected: Color, got: Color },
    #[error("{color} cannot place a tile on ({row}, {col})")]
    IllegalMove { color: Color, row: usize, col: usize },
    #[error("{color} cannot pass while it has legal moves or the game is over")]
    IllegalPass { color: Color },
    #[error("there is no move to undo")]
    EmptyHistory,
}
