//! In-place move execution and its exact inverse.
//!
//! [`apply_move`] and [`undo_move`] must nest like a stack: the last move
//! applied is the first one undone. That lets the search walk the whole game
//! tree on a single [`Board`] without copying it at each node.

use crate::board::{Board, Cell, Coord, Side};
use crate::constants::DIRECTIONS;
use crate::movegen::{bracket_len, step};

/// Cells whose color was changed by one [`apply_move`] call, excluding the
/// placed disc itself. Needed to undo that move.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlipRecord {
    flips: Vec<Coord>,
}

impl FlipRecord {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flips.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.flips.len()
    }

    pub fn as_slice(&self) -> &[Coord] {
        &self.flips
    }
}

/// Play `side` at `coord`, flipping every bracketed opponent disc and
/// handing the turn to the opponent.
///
/// If no direction brackets anything (the move is illegal) the board is left
/// untouched and the returned record is empty. Callers should treat an empty
/// record as a rejected move.
pub fn apply_move(board: &mut Board, side: Side, coord: Coord) -> FlipRecord {
    let mut record = FlipRecord::default();
    if board.get(coord) != Cell::Empty {
        return record;
    }

    for dir in DIRECTIONS {
        let run = bracket_len(board, side, coord, dir);
        let mut cur = coord;
        for _ in 0..run {
            let Some(next) = step(cur, dir) else { break };
            record.flips.push(next);
            cur = next;
        }
    }
    if record.is_empty() {
        return record;
    }

    let own = side.cell();
    board.set(coord, own);
    for &pt in &record.flips {
        board.set(pt, own);
    }
    board.set_side_to_move(side.opposite());
    record
}

/// Reverse a prior `apply_move(board, side, coord)` that returned `record`.
pub fn undo_move(board: &mut Board, side: Side, coord: Coord, record: &FlipRecord) {
    let opp = side.opposite().cell();
    for &pt in &record.flips {
        board.set(pt, opp);
    }
    board.set(coord, Cell::Empty);
    board.set_side_to_move(side);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movegen::legal_moves;

    #[test]
    fn test_apply_from_initial_position() {
        let mut board = Board::new();
        let record = apply_move(&mut board, Side::Black, (2, 4));

        assert_eq!(record.as_slice(), &[(3, 4)]);
        assert_eq!(board.get((2, 4)), Cell::Black);
        assert_eq!(board.get((3, 4)), Cell::Black);
        assert_eq!(board.side_to_move(), Side::White);
        assert_eq!(board.piece_counts(), (4, 1));
    }

    #[test]
    fn test_undo_restores_position() {
        let mut board = Board::new();
        let before = board.clone();
        let record = apply_move(&mut board, Side::Black, (5, 3));
        assert_ne!(board, before);
        undo_move(&mut board, Side::Black, (5, 3), &record);
        assert_eq!(board, before);
    }

    #[test]
    fn test_illegal_move_is_noop() {
        let mut board = Board::new();
        let before = board.clone();

        // Empty but brackets nothing.
        let record = apply_move(&mut board, Side::Black, (2, 3));
        assert!(record.is_empty());
        assert_eq!(board, before);

        // Occupied.
        let record = apply_move(&mut board, Side::Black, (3, 4));
        assert!(record.is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn test_multi_direction_flip() {
        // Three runs meet at (2,2): east (one disc), south-east (one disc)
        // and south (two discs).
        let mut board = Board::empty(Side::Black);
        board.set((2, 3), Cell::White);
        board.set((2, 4), Cell::Black);
        board.set((3, 3), Cell::White);
        board.set((4, 4), Cell::Black);
        board.set((3, 2), Cell::White);
        board.set((4, 2), Cell::White);
        board.set((5, 2), Cell::Black);

        let record = apply_move(&mut board, Side::Black, (2, 2));
        let mut flips = record.as_slice().to_vec();
        flips.sort_unstable();
        assert_eq!(flips, vec![(2, 3), (3, 2), (3, 3), (4, 2)]);
        assert_eq!(board.piece_counts(), (8, 0));

        undo_move(&mut board, Side::Black, (2, 2), &record);
        assert_eq!(board.piece_counts(), (3, 4));
        assert_eq!(board.get((2, 2)), Cell::Empty);
    }

    #[test]
    fn test_nested_apply_undo() {
        let mut board = Board::new();
        let start = board.clone();
        let mut stack = Vec::new();

        for _ in 0..6 {
            let side = board.side_to_move();
            let Some(&mv) = legal_moves(&board, side).first() else {
                break;
            };
            let record = apply_move(&mut board, side, mv);
            assert!(!record.is_empty());
            stack.push((side, mv, record));
        }
        while let Some((side, mv, record)) = stack.pop() {
            undo_move(&mut board, side, mv, &record);
        }
        assert_eq!(board, start);
    }
}
