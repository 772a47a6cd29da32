pub mod alpha_beta_searcher;
pub mod board;
pub mod evaluate;
pub mod game;
pub mod mcts;
pub mod player;

#[cfg(feature = "instrumentation")]
pub mod instrumentation;
