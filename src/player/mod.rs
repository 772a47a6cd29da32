//! Players wrap an engine behind the referee's protocol. Each player keeps
//! a private copy of the game, applies its own moves and its opponent's to
//! it, and searches on that copy when asked to move.

mod engine;
mod strategy;

use log::info;
use thiserror::Error;

use crate::alpha_beta_searcher::{SearchConfig, SearchError};
use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::game_move::Move;
use crate::board::Board;
use crate::mcts::MctsConfig;

pub use engine::{AlphaBetaEngine, Engine, MctsEngine, RandomEngine};
pub use strategy::Strategy;

#[derive(Error, Debug)]
pub enum PlayerError {
    #[error("asked to move but the game is over")]
    GameOver,
    #[error("no game has been started")]
    NotStarted,
    #[error("opponent played an illegal move: {0}")]
    IllegalOpponentMove(Move),
    #[error("search error: {0}")]
    Search(#[from] SearchError),
    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

/// The protocol the referee drives players through. Coordinates are
/// `(row, col)`; `None` stands for a pass.
pub trait Player: Send {
    fn name(&self) -> &str;

    /// Starts a fresh game in which this player plays `color`.
    fn new_game(&mut self, color: Color) -> Result<(), PlayerError>;

    /// Chooses a move, applies it to the private board and returns it.
    fn get_player_move(&mut self) -> Result<Option<(usize, usize)>, PlayerError>;

    /// Applies the opponent's move to the private board. A move that is not
    /// legal for the opponent is a protocol violation.
    fn play_opponent_move(&mut self, coordinates: Option<(usize, usize)>)
        -> Result<(), PlayerError>;

    fn end_game(&mut self, winner: Option<Color>);
}

pub type AlphaBetaPlayer = EnginePlayer<AlphaBetaEngine>;
pub type MctsPlayer = EnginePlayer<MctsEngine>;
pub type RandomPlayer = EnginePlayer<RandomEngine>;

/// A `Player` that asks `engine` for its moves.
pub struct EnginePlayer<E> {
    engine: E,
    board_size: usize,
    board: Board,
    color: Option<Color>,
}

impl<E: Engine> EnginePlayer<E> {
    pub fn new(engine: E, board_size: usize) -> Self {
        Self {
            engine,
            board_size,
            board: Board::default(),
            color: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

impl AlphaBetaPlayer {
    pub fn alpha_beta(config: SearchConfig, board_size: usize) -> Self {
        Self::new(AlphaBetaEngine::new(config), board_size)
    }
}

impl MctsPlayer {
    pub fn mcts(config: MctsConfig, board_size: usize) -> Self {
        Self::new(MctsEngine::new(config), board_size)
    }
}

impl RandomPlayer {
    pub fn random(seed: Option<u64>, board_size: usize) -> Self {
        Self::new(RandomEngine::new(seed), board_size)
    }
}

impl<E: Engine> Player for EnginePlayer<E> {
    fn name(&self) -> &str {
        self.engine.name()
    }

    fn new_game(&mut self, color: Color) -> Result<(), PlayerError> {
        self.board = Board::new(self.board_size)?;
        self.color = Some(color);
        Ok(())
    }

    fn get_player_move(&mut self) -> Result<Option<(usize, usize)>, PlayerError> {
        let color = self.color.ok_or(PlayerError::NotStarted)?;
        if self.board.is_game_over() {
            return Err(PlayerError::GameOver);
        }
        if self.board.turn() != color {
            return Err(BoardError::WrongTurn {
                expected: self.board.turn(),
                got: color,
            }
            .into());
        }

        let game_move = self.engine.choose_move(&mut self.board, color)?;
        self.board.push(game_move)?;
        info!("{} ({}) plays {}", self.engine.name(), color, game_move);

        Ok(game_move.coordinates())
    }

    fn play_opponent_move(
        &mut self,
        coordinates: Option<(usize, usize)>,
    ) -> Result<(), PlayerError> {
        let opponent = self.color.ok_or(PlayerError::NotStarted)?.opposite();
        let game_move = match coordinates {
            Some((row, col)) => Move::new(opponent, row, col),
            None => Move::Pass(opponent),
        };

        self.board
            .push(game_move)
            .map_err(|_| PlayerError::IllegalOpponentMove(game_move))
    }

    fn end_game(&mut self, winner: Option<Color>) {
        let outcome = match (winner, self.color) {
            (None, _) => "drew",
            (Some(winner), Some(color)) if winner == color => "won",
            _ => "lost",
        };
        info!("{} {} the game", self.engine.name(), outcome);
    }
}
