use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::color::Color;
use super::MAX_BOARD_SIZE;

// Zobrist board hashing
// * One number for each color at each square ( 2 * 16 * 16 )
// * One number to indicate the side to move is white
// Total numbers:  2 * 256 + 1 = 513
//
// To get the zobrist hash for any position:
// [Hash for Black tile on (0, 0)] xor [Hash for White tile on (0, 1)] xor ... ( all tiles )
// ... xor [Hash for white to move] ( if white is to move )
//
// Squares are always indexed on the 16x16 grid so that the table is shared by
// every board size.

const SQUARE_COUNT: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE;
const NUMBER_COUNT: usize = 2 * SQUARE_COUNT + 1;
const WHITE_TO_MOVE: usize = 2 * SQUARE_COUNT;
const ZOBRIST_SEED: u64 = 0x5eed_0e11_0000_0001;

static ZOBRIST: Lazy<Zobrist> = Lazy::new(Zobrist::new);

pub struct Zobrist {
    numbers: Vec<u64>,
}

impl Zobrist {
    fn new() -> Self {
        Self {
            numbers: init_rand_numbers(),
        }
    }

    pub fn get() -> &'static Zobrist {
        &ZOBRIST
    }

    // nums 0..512: tile squares
    pub fn tile_num(&self, color: Color, row: usize, col: usize) -> u64 {
        self.numbers[index_of(color, row, col)]
    }

    // num 512: current turn
    pub fn turn_num(&self, color: Color) -> u64 {
        match color {
            Color::White => self.numbers[WHITE_TO_MOVE],
            Color::Black => 0,
        }
    }
}

fn init_rand_numbers() -> Vec<u64> {
    // fixed seed: fingerprints are identical from one run to the next
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
    (0..NUMBER_COUNT).map(|_| rng.gen()).collect()
}

fn index_of(color: Color, row: usize, col: usize) -> usize {
    // (color, row, col) flattened, 0 <= row, col < 16
    (color as usize * SQUARE_COUNT) + (row * MAX_BOARD_SIZE) + col
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_nums_random() {
        let zob = Zobrist::get();
        let mut set = HashSet::new();

        for (i, num) in zob.numbers.iter().enumerate() {
            assert!(set.insert(*num), "zobrist number {} ({}) is repeated", i, num);
        }
    }

    #[test]
    fn test_all_tiles_resolve_to_unique_index() {
        let mut seen_indexes = HashSet::new();

        for color in &Color::ALL {
            for row in 0..MAX_BOARD_SIZE {
                for col in 0..MAX_BOARD_SIZE {
                    assert!(seen_indexes.insert(index_of(*color, row, col)));
                }
            }
        }

        assert_eq!(seen_indexes.len(), WHITE_TO_MOVE);
        assert!(!seen_indexes.contains(&WHITE_TO_MOVE));
    }

    #[test]
    fn test_black_to_move_contributes_nothing() {
        assert_eq!(Zobrist::get().turn_num(Color::Black), 0);
        assert_ne!(Zobrist::get().turn_num(Color::White), 0);
    }
}
