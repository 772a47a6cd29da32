pub mod color;
pub mod error;
pub mod game_move;

mod display;
mod zobrist;


use smallvec::SmallVec;

use color::Color;
use error::BoardError;
use game_move::Move;
use zobrist::Zobrist;

pub const MIN_BOARD_SIZE: usize = 4;
pub const MAX_BOARD_SIZE: usize = 16;
pub const DEFAULT_BOARD_SIZE: usize = 10;

// Moore neighborhood, as (row, col) offsets.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

type Flips = SmallVec<[usize; 16]>;

#[derive(Clone, Debug)]
struct MoveRecord {
    game_move: Move,
    flipped: Flips,
}

/// Represents the state of a reversi board: the grid of tiles, the tile
/// tallies, the side to move and the undo history used by `push`/`pop`.
/// The zobrist fingerprint is maintained incrementally on every change.
#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
    black: usize,
    white: usize,
    turn: Color,
    hash: u64,
    history: Vec<MoveRecord>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_BOARD_SIZE)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self.cells == other.cells
            && self.black == other.black
            && self.white == other.white
            && self.turn == other.turn
            && self.hash == other.hash
    }
}

impl Eq for Board {}

impl Board {
    /// Creates a `size`x`size` board with the four starting tiles in the
    /// center. Black moves first.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        check_size(size)?;
        let mut board = Self::empty(size);
        let middle = size / 2;
        board.put(middle - 1, middle - 1, Color::Black);
        board.put(middle - 1, middle, Color::White);
        board.put(middle, middle - 1, Color::White);
        board.put(middle, middle, Color::Black);
        Ok(board)
    }

    /// Builds a position from one string per row using `B`, `W` and `.`.
    pub fn from_rows(rows: &[&str], turn: Color) -> Result<Self, BoardError> {
        let size = rows.len();
        check_size(size)?;
        let mut board = Self::empty(size);

        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != size {
                return Err(BoardError::RaggedRow {
                    row,
                    len: symbols.len(),
                    expected: size,
                });
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                if let Some(color) = Color::from_symbol(symbol) {
                    board.put(row, col, color);
                }
            }
        }

        board.set_turn(turn);
        Ok(board)
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            black: 0,
            white: 0,
            turn: Color::Black,
            hash: 0,
            history: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) -> Color {
        if self.turn != turn {
            self.toggle_turn();
        }
        turn
    }

    pub fn fingerprint(&self) -> u64 {
        self.hash
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Color> {
        self.cells[self.index(row, col)]
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Tile tallies as `(white, black)`.
    pub fn tile_counts(&self) -> (usize, usize) {
        (self.white, self.black)
    }

    pub fn tile_count(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    pub fn empty_count(&self) -> usize {
        self.size * self.size - self.black - self.white
    }

    /// Number of moves pushed and not yet popped.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Deep copy of the position without its undo history.
    pub fn snapshot(&self) -> Self {
        Self {
            size: self.size,
            cells: self.cells.clone(),
            black: self.black,
            white: self.white,
            turn: self.turn,
            hash: self.hash,
            history: Vec::new(),
        }
    }

    pub fn is_valid_move(&self, color: Color, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size || self.cell(row, col).is_some() {
            return false;
        }

        DIRECTIONS
            .iter()
            .any(|&direction| self.captures_in_direction(color, row, col, direction) > 0)
    }

    /// All placements available to the side to move, in row-major order.
    /// Empty when the side to move has to pass.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.turn)
    }

    pub fn legal_moves_for(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.is_valid_move(color, row, col) {
                    moves.push(Move::new(color, row, col));
                }
            }
        }
        moves
    }

    /// The moves a search has to explore: the legal placements, or a single
    /// pass when the side to move is blocked but the game goes on.
    pub fn playable_moves(&self) -> Vec<Move> {
        let moves = self.legal_moves();
        if moves.is_empty() && self.has_legal_move(self.turn.opposite()) {
            return vec![Move::Pass(self.turn)];
        }
        moves
    }

    pub fn count_legal_moves(&self, color: Color) -> usize {
        let mut count = 0;
        for row in 0..self.size {
            for col in 0..self.size {
                if self.is_valid_move(color, row, col) {
                    count += 1;
                }
            }
        }
        count
    }

    pub fn has_legal_move(&self, color: Color) -> bool {
        (0..self.size).any(|row| (0..self.size).any(|col| self.is_valid_move(color, row, col)))
    }

    pub fn is_game_over(&self) -> bool {
        !self.has_legal_move(Color::Black) && !self.has_legal_move(Color::White)
    }

    /// The color with more tiles, `None` on a tie.
    pub fn winner(&self) -> Option<Color> {
        if self.black > self.white {
            Some(Color::Black)
        } else if self.white > self.black {
            Some(Color::White)
        } else {
            None
        }
    }

    /// Applies `game_move`, flipping captured tiles and handing the turn to
    /// the opponent.
    pub fn push(&mut self, game_move: Move) -> Result<(), BoardError> {
        let color = game_move.color();
        if color != self.turn {
            return Err(BoardError::WrongTurn {
                expected: self.turn,
                got: color,
            });
        }

        let flipped = match game_move {
            Move::Place { row, col, .. } => {
                if row >= self.size || col >= self.size {
                    return Err(BoardError::OutOfBounds { row, col });
                }
                let flipped = self.flips_for(color, row, col);
                if flipped.is_empty() {
                    return Err(BoardError::IllegalMove { color, row, col });
                }
                self.put(row, col, color);
                for &index in flipped.iter() {
                    self.flip(index);
                }
                flipped
            }
            Move::Pass(_) => {
                if self.has_legal_move(color) || !self.has_legal_move(color.opposite()) {
                    return Err(BoardError::IllegalPass { color });
                }
                Flips::new()
            }
        };

        self.toggle_turn();
        self.history.push(MoveRecord { game_move, flipped });
        Ok(())
    }

    /// Undoes the most recent `push`, returning the move it applied.
    pub fn pop(&mut self) -> Result<Move, BoardError> {
        let record = self.history.pop().ok_or(BoardError::EmptyHistory)?;

        if let Move::Place { row, col, .. } = record.game_move {
            for &index in record.flipped.iter() {
                self.flip(index);
            }
            self.remove(row, col);
        }
        self.toggle_turn();

        Ok(record.game_move)
    }

    /// Pushes `game_move`, runs `f` on the resulting position and pops the
    /// move again before returning, whatever `f` returned.
    pub fn with_move<R, E, F>(&mut self, game_move: Move, f: F) -> Result<R, E>
    where
        E: From<BoardError>,
        F: FnOnce(&mut Board) -> Result<R, E>,
    {
        self.push(game_move)?;
        let result = f(self);
        self.pop()?;
        result
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn captures_in_direction(
        &self,
        color: Color,
        row: usize,
        col: usize,
        (d_row, d_col): (isize, isize),
    ) -> usize {
        let opponent = color.opposite();
        let mut r = row as isize + d_row;
        let mut c = col as isize + d_col;
        let mut captured = 0;

        while self.in_bounds(r, c) {
            match self.cell(r as usize, c as usize) {
                Some(tile) if tile == opponent => captured += 1,
                Some(_) => return captured,
                None => return 0,
            }
            r += d_row;
            c += d_col;
        }

        0
    }

    fn flips_for(&self, color: Color, row: usize, col: usize) -> Flips {
        let mut flips = Flips::new();
        if self.cell(row, col).is_some() {
            return flips;
        }

        for &(d_row, d_col) in DIRECTIONS.iter() {
            let captured = self.captures_in_direction(color, row, col, (d_row, d_col));
            for step in 1..=captured as isize {
                let r = (row as isize + d_row * step) as usize;
                let c = (col as isize + d_col * step) as usize;
                flips.push(self.index(r, c));
            }
        }

        flips
    }

    fn put(&mut self, row: usize, col: usize, color: Color) {
        let index = self.index(row, col);
        self.cells[index] = Some(color);
        self.adjust_count(color, 1);
        self.hash ^= Zobrist::get().tile_num(color, row, col);
    }

    fn remove(&mut self, row: usize, col: usize) {
        let index = self.index(row, col);
        if let Some(color) = self.cells[index].take() {
            self.adjust_count(color, -1);
            self.hash ^= Zobrist::get().tile_num(color, row, col);
        }
    }

    fn flip(&mut self, index: usize) {
        let (row, col) = (index / self.size, index % self.size);
        if let Some(color) = self.cells[index] {
            self.remove(row, col);
            self.put(row, col, color.opposite());
        }
    }

    fn adjust_count(&mut self, color: Color, delta: isize) {
        let count = match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        };
        *count = (*count as isize + delta) as usize;
    }

    fn toggle_turn(&mut self) -> Color {
        self.hash ^= Zobrist::get().turn_num(Color::White);
        self.turn = self.turn.opposite();
        self.turn
    }
}

fn check_size(size: usize) -> Result<(), BoardError> {
    if size % 2 != 0 || !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(BoardError::InvalidSize {
            size,
            min: MIN_BOARD_SIZE,
            max: MAX_BOARD_SIZE,
        });
    }
    Ok(())
}
