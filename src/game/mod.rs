//! Referee loop and the harness that pits strategies against each other.

mod compare;

use std::time::{Duration, Instant};

use log::{debug, info};
use thiserror::Error;

use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::game_move::Move;
use crate::board::{Board, DEFAULT_BOARD_SIZE};
use crate::player::{Player, PlayerError};

pub use compare::{compare, ComparisonConfig, ComparisonSummary};

#[derive(Error, Debug)]
pub enum GameError {
    #[error("{color} played an illegal move at ({row}, {col})")]
    IllegalMove {
        color: Color,
        row: usize,
        col: usize,
    },
    #[error("{color} passed while a move was available")]
    IllegalPass { color: Color },
    #[error("player error: {0}")]
    Player(#[from] PlayerError),
    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub board_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

/// How a finished game ended.
#[derive(Clone, Debug, PartialEq)]
pub struct GameOutcome {
    /// `None` on a draw.
    pub winner: Option<Color>,
    pub white_tiles: usize,
    pub black_tiles: usize,
    /// Moves played, passes included.
    pub moves: usize,
    pub black_time: Duration,
    pub white_time: Duration,
}

impl GameOutcome {
    pub fn tiles(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black_tiles,
            Color::White => self.white_tiles,
        }
    }

    /// Wall-clock time `color` spent choosing moves.
    pub fn thinking_time(&self, color: Color) -> Duration {
        match color {
            Color::Black => self.black_time,
            Color::White => self.white_time,
        }
    }
}

/// Plays one game between `black` and `white` on a fresh board, checking
/// every move against the referee's own board before forwarding it to the
/// other player. An illegal move aborts the game.
pub fn run_local_game(
    black: &mut dyn Player,
    white: &mut dyn Player,
    config: &GameConfig,
) -> Result<GameOutcome, GameError> {
    let mut board = Board::new(config.board_size)?;
    black.new_game(Color::Black)?;
    white.new_game(Color::White)?;
    info!(
        "{} (black) vs {} (white) on {}x{}",
        black.name(),
        white.name(),
        config.board_size,
        config.board_size
    );

    let mut black_time = Duration::default();
    let mut white_time = Duration::default();
    let mut moves = 0;

    while !board.is_game_over() {
        let color = board.turn();

        let started = Instant::now();
        let coordinates = match color {
            Color::Black => black.get_player_move()?,
            Color::White => white.get_player_move()?,
        };
        match color {
            Color::Black => black_time += started.elapsed(),
            Color::White => white_time += started.elapsed(),
        }

        let game_move = match coordinates {
            Some((row, col)) => Move::new(color, row, col),
            None => Move::Pass(color),
        };
        board.push(game_move).map_err(|_| match coordinates {
            Some((row, col)) => GameError::IllegalMove { color, row, col },
            None => GameError::IllegalPass { color },
        })?;

        match color {
            Color::Black => white.play_opponent_move(coordinates)?,
            Color::White => black.play_opponent_move(coordinates)?,
        }

        moves += 1;
        debug!("move {}: {}\n{}", moves, game_move, board);
    }

    let winner = board.winner();
    let (white_tiles, black_tiles) = board.tile_counts();
    match winner {
        Some(color) => info!(
            "{} wins {} to {}",
            color,
            board.tile_count(color),
            board.tile_count(color.opposite())
        ),
        None => info!("draw at {} tiles each", black_tiles),
    }
    black.end_game(winner);
    white.end_game(winner);

    Ok(GameOutcome {
        winner,
        white_tiles,
        black_tiles,
        moves,
        black_time,
        white_time,
    })
}
