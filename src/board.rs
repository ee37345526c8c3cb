//! Board state: the 8x8 grid of cells plus the side to move.

use std::fmt;

use crate::constants::{CELLS, INITIAL_BLACK, INITIAL_WHITE, N};

/// Contents of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

/// One of the two players. Black moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// The cell value holding this side's disc.
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }

    /// +1 for Black, -1 for White.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Side::Black => 1,
            Side::White => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

/// A `(row, col)` pair, each in `0..8`.
///
/// Board accessors do not range-check; callers validate coordinates first
/// (see [`parse_coord`]).
pub type Coord = (usize, usize);

/// Result of a finished game, decided by disc count.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Side),
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(side) => write!(f, "{side} wins"),
            Outcome::Tie => write!(f, "It's a tie!"),
        }
    }
}

/// The game state: every cell plus whose turn it is.
///
/// One instance lives for the whole game. The search mutates it in place
/// through the apply/undo pair in [`crate::moves`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; N]; N],
    side_to_move: Side,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The fixed starting position with Black to move.
    pub fn new() -> Self {
        let mut board = Self::empty(Side::Black);
        for pt in INITIAL_BLACK {
            board.set(pt, Cell::Black);
        }
        for pt in INITIAL_WHITE {
            board.set(pt, Cell::White);
        }
        board
    }

    /// An empty grid. Mostly useful for setting up positions in tests.
    pub fn empty(side_to_move: Side) -> Self {
        Self {
            cells: [[Cell::Empty; N]; N],
            side_to_move,
        }
    }

    #[inline]
    pub fn get(&self, (row, col): Coord) -> Cell {
        self.cells[row][col]
    }

    #[inline]
    pub fn set(&mut self, (row, col): Coord, cell: Cell) {
        self.cells[row][col] = cell;
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn set_side_to_move(&mut self, side: Side) {
        self.side_to_move = side;
    }

    /// Hand the turn to the other side without placing a disc.
    pub fn pass(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Number of cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// `(black, white)` disc counts.
    pub fn piece_counts(&self) -> (usize, usize) {
        (self.count(Cell::Black), self.count(Cell::White))
    }

    /// Winner by disc count; equal counts are a tie.
    pub fn outcome(&self) -> Outcome {
        let (black, white) = self.piece_counts();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Outcome::Winner(Side::Black),
            std::cmp::Ordering::Less => Outcome::Winner(Side::White),
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    /// Iterate over all coordinates in row-major order.
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..CELLS).map(|i| (i / N, i % N))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<&str> = row
                .iter()
                .map(|c| match c {
                    Cell::Black => "B",
                    Cell::White => "W",
                    Cell::Empty => ".",
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Reasons a `"row col"` string is not a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordError {
    #[error("expected two numbers, got {0}")]
    WrongArity(usize),

    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("{0} is outside 0-{max}", max = N - 1)]
    OutOfRange(usize),
}

/// Parse a `"row col"` string (whitespace separated, each in `0..8`).
pub fn parse_coord(s: &str) -> Result<Coord, CoordError> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(CoordError::WrongArity(parts.len()));
    }
    let mut values = [0usize; 2];
    for (slot, part) in values.iter_mut().zip(&parts) {
        let v: usize = part
            .parse()
            .map_err(|_| CoordError::NotANumber((*part).to_string()))?;
        if v >= N {
            return Err(CoordError::OutOfRange(v));
        }
        *slot = v;
    }
    Ok((values[0], values[1]))
}

/// Format a coordinate as `"(row, col)"`.
pub fn str_coord((row, col): Coord) -> String {
    format!("({row}, {col})")
}
