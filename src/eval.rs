//! Static evaluation of a board position.
//!
//! The score is disc difference plus a positional term. Positive values
//! favor Black, negative values favor White.
//!
//! Cells fall into three disjoint classes, checked in this order:
//! - corners (4 cells)
//! - cells touching a corner orthogonally or diagonally (12 cells)
//! - remaining edge cells (16 cells)
//!
//! A cell gets only the weight of the first class that matches. The edge
//! cells next to a corner, like (0,1), are corner-adjacent and score -25,
//! not -25 + 10. So the edge class has 16 cells, not all 28 non-corner
//! cells of the rim.
//!
//! Each occupied cell in a class contributes the class weight, signed by its
//! owner. All other cells have no positional weight.

use crate::board::{Board, Cell, Side};
use crate::constants::{N, WEIGHT_CORNER, WEIGHT_CORNER_ADJACENT, WEIGHT_EDGE};

/// Positional class of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SquareClass {
    Corner,
    CornerAdjacent,
    Edge,
    Interior,
}

impl SquareClass {
    pub const fn weight(self) -> i32 {
        match self {
            SquareClass::Corner => WEIGHT_CORNER,
            SquareClass::CornerAdjacent => WEIGHT_CORNER_ADJACENT,
            SquareClass::Edge => WEIGHT_EDGE,
            SquareClass::Interior => 0,
        }
    }
}

const fn is_rim(i: usize) -> bool {
    i == 0 || i == N - 1
}

const fn is_next_to_rim(i: usize) -> bool {
    i == 1 || i == N - 2
}

/// Classify a cell. Each cell belongs to exactly one class.
pub const fn square_class(row: usize, col: usize) -> SquareClass {
    let row_rim = is_rim(row);
    let col_rim = is_rim(col);
    if row_rim && col_rim {
        SquareClass::Corner
    } else if (row_rim || is_next_to_rim(row)) && (col_rim || is_next_to_rim(col)) {
        SquareClass::CornerAdjacent
    } else if row_rim || col_rim {
        SquareClass::Edge
    } else {
        SquareClass::Interior
    }
}

const fn build_weights() -> [[i32; N]; N] {
    let mut table = [[0; N]; N];
    let mut row = 0;
    while row < N {
        let mut col = 0;
        while col < N {
            table[row][col] = square_class(row, col).weight();
            col += 1;
        }
        row += 1;
    }
    table
}

/// Positional weight for every cell.
pub static POSITION_WEIGHTS: [[i32; N]; N] = build_weights();

/// Score `board` from Black's point of view.
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;
    for pt @ (row, col) in Board::coords() {
        let sign = match board.get(pt) {
            Cell::Black => 1,
            Cell::White => -1,
            Cell::Empty => continue,
        };
        score += sign * (1 + POSITION_WEIGHTS[row][col]);
    }
    score
}

/// Score `board` from `side`'s point of view.
#[inline]
pub fn evaluate_for(board: &Board, side: Side) -> i32 {
    side.sign() * evaluate(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_count(class: SquareClass) -> usize {
        Board::coords()
            .filter(|&(r, c)| square_class(r, c) == class)
            .count()
    }

    #[test]
    fn test_class_sizes() {
        assert_eq!(class_count(SquareClass::Corner), 4);
        assert_eq!(class_count(SquareClass::CornerAdjacent), 12);
        assert_eq!(class_count(SquareClass::Edge), 16);
        assert_eq!(class_count(SquareClass::Interior), 32);
    }

    #[test]
    fn test_weight_table() {
        assert_eq!(POSITION_WEIGHTS[0], [100, -25, 10, 10, 10, 10, -25, 100]);
        assert_eq!(POSITION_WEIGHTS[1], [-25, -25, 0, 0, 0, 0, -25, -25]);
        assert_eq!(POSITION_WEIGHTS[4], [10, 0, 0, 0, 0, 0, 0, 10]);
        assert_eq!(POSITION_WEIGHTS[7], POSITION_WEIGHTS[0]);
    }

    #[test]
    fn test_initial_position_is_even() {
        assert_eq!(evaluate(&Board::new()), 0);
    }

    #[test]
    fn test_corner_counts_once() {
        let mut board = Board::empty(Side::Black);
        board.set((0, 0), Cell::Black);
        assert_eq!(evaluate(&board), 1 + WEIGHT_CORNER);

        board.set((7, 7), Cell::White);
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn test_c_square_is_not_an_edge() {
        for (row, col) in [(0, 1), (1, 0), (0, 6), (7, 1), (6, 7)] {
            assert_eq!(square_class(row, col), SquareClass::CornerAdjacent);
        }

        let mut board = Board::empty(Side::Black);
        board.set((0, 1), Cell::Black);
        assert_eq!(evaluate(&board), 1 + WEIGHT_CORNER_ADJACENT);
        assert_ne!(evaluate(&board), 1 + WEIGHT_CORNER_ADJACENT + WEIGHT_EDGE);
    }

    #[test]
    fn test_corner_adjacent_is_penalized() {
        let mut board = Board::empty(Side::Black);
        board.set((1, 1), Cell::Black);
        assert_eq!(evaluate(&board), 1 + WEIGHT_CORNER_ADJACENT);
        assert_eq!(evaluate_for(&board, Side::White), -(1 + WEIGHT_CORNER_ADJACENT));
    }

    #[test]
    fn test_edge_and_interior() {
        let mut board = Board::empty(Side::Black);
        board.set((0, 3), Cell::White);
        board.set((3, 3), Cell::Black);
        assert_eq!(evaluate(&board), -(1 + WEIGHT_EDGE) + 1);
    }
}
