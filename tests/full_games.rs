use reversi::alpha_beta_searcher::SearchConfig;
use reversi::board::color::Color;
use reversi::game::{compare, run_local_game, ComparisonConfig, GameConfig, GameError};
use reversi::mcts::{ExpansionPolicy, MctsConfig};
use reversi::player::{
    AlphaBetaPlayer, MctsPlayer, Player, PlayerError, RandomPlayer, Strategy,
};

/// Claims the top left corner every turn, legal or not.
struct CornerGrabber;

impl Player for CornerGrabber {
    fn name(&self) -> &str {
        "corner-grabber"
    }

    fn new_game(&mut self, _color: Color) -> Result<(), PlayerError> {
        Ok(())
    }

    fn get_player_move(&mut self) -> Result<Option<(usize, usize)>, PlayerError> {
        Ok(Some((0, 0)))
    }

    fn play_opponent_move(&mut self, _: Option<(usize, usize)>) -> Result<(), PlayerError> {
        Ok(())
    }

    fn end_game(&mut self, _winner: Option<Color>) {}
}

/// Always passes.
struct Passer;

impl Player for Passer {
    fn name(&self) -> &str {
        "passer"
    }

    fn new_game(&mut self, _color: Color) -> Result<(), PlayerError> {
        Ok(())
    }

    fn get_player_move(&mut self) -> Result<Option<(usize, usize)>, PlayerError> {
        Ok(None)
    }

    fn play_opponent_move(&mut self, _: Option<(usize, usize)>) -> Result<(), PlayerError> {
        Ok(())
    }

    fn end_game(&mut self, _winner: Option<Color>) {}
}

fn assert_consistent(outcome: &reversi::game::GameOutcome, size: usize) {
    let tiles = outcome.black_tiles + outcome.white_tiles;
    assert!(tiles <= size * size);
    assert!(tiles > 4);
    assert!(outcome.moves >= tiles - 4);

    let expected_winner = if outcome.black_tiles > outcome.white_tiles {
        Some(Color::Black)
    } else if outcome.white_tiles > outcome.black_tiles {
        Some(Color::White)
    } else {
        None
    };
    assert_eq!(outcome.winner, expected_winner);
}

#[test]
fn test_random_players_finish_a_default_game() {
    let mut black = RandomPlayer::random(Some(1), 10);
    let mut white = RandomPlayer::random(Some(2), 10);

    let outcome = run_local_game(&mut black, &mut white, &GameConfig::default()).unwrap();

    assert_consistent(&outcome, 10);
    assert_eq!(black.board(), white.board());
    assert!(black.board().is_game_over());
}

#[test]
fn test_alpha_beta_against_uct() {
    let config = GameConfig { board_size: 6 };
    let mut black = AlphaBetaPlayer::alpha_beta(
        SearchConfig {
            horizon: 2,
            ..SearchConfig::default()
        },
        6,
    );
    let mut white = MctsPlayer::mcts(
        MctsConfig {
            computational_budget: 30,
            expansion: ExpansionPolicy::Full,
            seed: Some(8),
            ..MctsConfig::default()
        },
        6,
    );

    let outcome = run_local_game(&mut black, &mut white, &config).unwrap();

    assert_consistent(&outcome, 6);
    assert_eq!(black.board(), white.board());
}

#[test]
fn test_same_seeds_replay_the_same_game() {
    let config = GameConfig { board_size: 8 };
    let play = || {
        let mut black = MctsPlayer::mcts(
            MctsConfig {
                computational_budget: 10,
                seed: Some(4),
                ..MctsConfig::default()
            },
            8,
        );
        let mut white = RandomPlayer::random(Some(5), 8);
        let outcome = run_local_game(&mut black, &mut white, &config).unwrap();
        (outcome.winner, outcome.black_tiles, outcome.white_tiles, outcome.moves)
    };

    assert_eq!(play(), play());
}

#[test]
fn test_referee_aborts_on_an_illegal_move() {
    let mut black = CornerGrabber;
    let mut white = RandomPlayer::random(Some(0), 8);

    let result = run_local_game(&mut black, &mut white, &GameConfig { board_size: 8 });

    assert!(matches!(
        result,
        Err(GameError::IllegalMove {
            color: Color::Black,
            row: 0,
            col: 0
        })
    ));
}

#[test]
fn test_referee_aborts_on_an_illegal_pass() {
    let mut black = RandomPlayer::random(Some(0), 8);
    let mut white = Passer;

    let result = run_local_game(&mut black, &mut white, &GameConfig { board_size: 8 });

    assert!(matches!(
        result,
        Err(GameError::IllegalPass {
            color: Color::White
        })
    ));
}

#[test]
fn test_compare_counts_every_game() {
    let config = ComparisonConfig {
        game: GameConfig { board_size: 6 },
        search: SearchConfig {
            horizon: 1,
            ..SearchConfig::default()
        },
        mcts: MctsConfig {
            seed: Some(17),
            ..MctsConfig::default()
        },
    };

    let summary = compare(Strategy::Random, Strategy::AlphaBeta, 6, &config).unwrap();

    assert_eq!(summary.games, 6);
    assert_eq!(summary.black_wins + summary.white_wins + summary.draws, 6);
    assert!(summary.average_black_tiles + summary.average_white_tiles <= 36.);
    assert_eq!(summary.black, Strategy::Random);
    assert_eq!(summary.white, Strategy::AlphaBeta);
}
