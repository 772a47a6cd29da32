use reversi::alpha_beta_searcher::{MtdfMode, SearchConfig};
use reversi::board::color::Color;
use reversi::board::game_move::Move;
use reversi::board::Board;
use reversi::player::{AlphaBetaPlayer, Player, PlayerError, RandomPlayer};

#[test]
fn test_players_stay_in_sync_without_a_referee() {
    let mut black = AlphaBetaPlayer::alpha_beta(
        SearchConfig {
            horizon: 2,
            mtdf_mode: MtdfMode::Converge,
            ..SearchConfig::default()
        },
        6,
    );
    let mut white = RandomPlayer::random(Some(12), 6);
    black.new_game(Color::Black).unwrap();
    white.new_game(Color::White).unwrap();

    let mut turn = Color::Black;
    while !black.board().is_game_over() {
        match turn {
            Color::Black => {
                let played = black.get_player_move().unwrap();
                white.play_opponent_move(played).unwrap();
            }
            Color::White => {
                let played = white.get_player_move().unwrap();
                black.play_opponent_move(played).unwrap();
            }
        }
        turn = turn.opposite();
        assert_eq!(black.board(), white.board());
    }

    assert!(matches!(
        black.get_player_move(),
        Err(PlayerError::GameOver)
    ));
    black.end_game(black.board().winner());
    white.end_game(white.board().winner());
}

#[test]
fn test_player_rejects_a_move_for_an_occupied_square() {
    let mut white = RandomPlayer::random(None, 8);
    white.new_game(Color::White).unwrap();

    // the center is already taken
    match white.play_opponent_move(Some((3, 3))) {
        Err(PlayerError::IllegalOpponentMove(game_move)) => {
            assert_eq!(game_move, Move::new(Color::Black, 3, 3));
        }
        other => panic!("expected a protocol violation, got {:?}", other),
    }
    assert_eq!(white.board(), &Board::new(8).unwrap());
}

#[test]
fn test_player_rejects_an_opponent_move_out_of_turn() {
    let mut black = RandomPlayer::random(Some(3), 8);
    black.new_game(Color::Black).unwrap();

    // white cannot move before black has opened
    assert!(matches!(
        black.play_opponent_move(Some((2, 4))),
        Err(PlayerError::IllegalOpponentMove(_))
    ));

    let opening = black.get_player_move().unwrap();
    assert!(opening.is_some());
    assert_eq!(black.board().turn(), Color::White);
}

#[test]
fn test_new_game_resets_the_private_board() {
    let mut black = RandomPlayer::random(Some(6), 8);
    black.new_game(Color::Black).unwrap();
    black.get_player_move().unwrap();
    assert_eq!(black.board().ply(), 1);

    black.new_game(Color::Black).unwrap();
    assert_eq!(black.board(), &Board::new(8).unwrap());
    assert_eq!(black.board().ply(), 0);
}
