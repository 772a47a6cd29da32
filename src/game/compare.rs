use std::fmt;
use std::time::Duration;

use log::info;
use rayon::prelude::*;

use crate::alpha_beta_searcher::SearchConfig;
use crate::board::color::Color;
use crate::mcts::MctsConfig;
use crate::player::Strategy;

use super::{run_local_game, GameConfig, GameError, GameOutcome};

/// Settings shared by every game of a comparison.
#[derive(Clone, Debug, Default)]
pub struct ComparisonConfig {
    pub game: GameConfig,
    pub search: SearchConfig,
    /// When `mcts.seed` is set, game `i` seeds its players with `seed + i`.
    pub mcts: MctsConfig,
}

impl ComparisonConfig {
    fn for_game(&self, index: usize) -> MctsConfig {
        let mut mcts = self.mcts.clone();
        mcts.seed = self.mcts.seed.map(|seed| seed.wrapping_add(index as u64));
        mcts
    }
}

/// Aggregate results of `compare`.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonSummary {
    pub black: Strategy,
    pub white: Strategy,
    pub games: usize,
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
    pub average_black_tiles: f64,
    pub average_white_tiles: f64,
    pub average_black_time: Duration,
    pub average_white_time: Duration,
}

impl ComparisonSummary {
    pub fn from_outcomes(black: Strategy, white: Strategy, outcomes: &[GameOutcome]) -> Self {
        let games = outcomes.len();
        let wins = |color: Color| {
            outcomes
                .iter()
                .filter(|outcome| outcome.winner == Some(color))
                .count()
        };
        let average_tiles = |color: Color| {
            if games == 0 {
                return 0.;
            }
            let total: usize = outcomes.iter().map(|outcome| outcome.tiles(color)).sum();
            total as f64 / games as f64
        };
        let average_time = |color: Color| {
            if games == 0 {
                return Duration::default();
            }
            outcomes
                .iter()
                .map(|outcome| outcome.thinking_time(color))
                .sum::<Duration>()
                / games as u32
        };

        Self {
            black,
            white,
            games,
            black_wins: wins(Color::Black),
            white_wins: wins(Color::White),
            draws: outcomes.iter().filter(|outcome| outcome.winner.is_none()).count(),
            average_black_tiles: average_tiles(Color::Black),
            average_white_tiles: average_tiles(Color::White),
            average_black_time: average_time(Color::Black),
            average_white_time: average_time(Color::White),
        }
    }
}

impl fmt::Display for ComparisonSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} games", self.games)?;
        writeln!(
            f,
            "black ({}): {} wins, {:.1} tiles, {:?} thinking per game",
            self.black, self.black_wins, self.average_black_tiles, self.average_black_time
        )?;
        writeln!(
            f,
            "white ({}): {} wins, {:.1} tiles, {:?} thinking per game",
            self.white, self.white_wins, self.average_white_tiles, self.average_white_time
        )?;
        write!(f, "draws: {}", self.draws)
    }
}

/// Plays `games` independent games of `black` against `white` in parallel
/// and tallies the results.
pub fn compare(
    black: Strategy,
    white: Strategy,
    games: usize,
    config: &ComparisonConfig,
) -> Result<ComparisonSummary, GameError> {
    info!("comparing {} (black) against {} (white) over {} games", black, white, games);

    let outcomes = (0..games)
        .into_par_iter()
        .map(|index| {
            let mcts = config.for_game(index);
            let mut black_player = black.player(config.game.board_size, &config.search, &mcts);
            let mut white_player = white.player(config.game.board_size, &config.search, &mcts);
            run_local_game(black_player.as_mut(), white_player.as_mut(), &config.game)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ComparisonSummary::from_outcomes(black, white, &outcomes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(winner: Option<Color>, black_tiles: usize, white_tiles: usize) -> GameOutcome {
        GameOutcome {
            winner,
            white_tiles,
            black_tiles,
            moves: 30,
            black_time: Duration::from_millis(30),
            white_time: Duration::from_millis(10),
        }
    }

    #[test]
    fn test_summary_tallies_outcomes() {
        let outcomes = [
            outcome(Some(Color::Black), 20, 16),
            outcome(Some(Color::White), 10, 26),
            outcome(None, 18, 18),
            outcome(Some(Color::Black), 36, 0),
        ];
        let summary = ComparisonSummary::from_outcomes(Strategy::Uct, Strategy::Random, &outcomes);

        assert_eq!(summary.games, 4);
        assert_eq!(summary.black_wins, 2);
        assert_eq!(summary.white_wins, 1);
        assert_eq!(summary.draws, 1);
        assert_eq!(summary.average_black_tiles, 21.);
        assert_eq!(summary.average_white_tiles, 15.);
        assert_eq!(summary.average_black_time, Duration::from_millis(30));
        assert_eq!(summary.average_white_time, Duration::from_millis(10));
    }

    #[test]
    fn test_empty_summary() {
        let summary = ComparisonSummary::from_outcomes(Strategy::Random, Strategy::Random, &[]);
        assert_eq!(summary.games, 0);
        assert_eq!(summary.average_black_tiles, 0.);
        assert_eq!(summary.average_white_time, Duration::default());
    }

    #[test]
    fn test_seeds_differ_per_game() {
        let config = ComparisonConfig {
            mcts: MctsConfig {
                seed: Some(10),
                ..MctsConfig::default()
            },
            ..ComparisonConfig::default()
        };
        assert_eq!(config.for_game(0).seed, Some(10));
        assert_eq!(config.for_game(3).seed, Some(13));
        assert_eq!(ComparisonConfig::default().for_game(3).seed, None);
    }
}
