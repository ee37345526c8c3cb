//! Move legality and legal move enumeration.
//!
//! A move is legal when the target cell is empty and, in at least one of the
//! 8 directions, a run of one or more opponent discs is closed off by a disc
//! of the mover's own color. None of these functions mutate the board.

use crate::board::{Board, Cell, Coord, Side};
use crate::constants::{DIRECTIONS, N};

/// Step one cell from `coord` in direction `(dr, dc)`.
/// Returns `None` when the step leaves the board.
#[inline]
pub(crate) fn step((row, col): Coord, (dr, dc): (isize, isize)) -> Option<Coord> {
    let r = row.checked_add_signed(dr)?;
    let c = col.checked_add_signed(dc)?;
    (r < N && c < N).then_some((r, c))
}

/// Number of opponent discs that `side` would bracket by playing at `coord`,
/// scanning in a single direction. Zero when the run is empty, runs off the
/// board, or ends on an empty cell.
pub(crate) fn bracket_len(board: &Board, side: Side, coord: Coord, dir: (isize, isize)) -> usize {
    let own = side.cell();
    let opp = side.opposite().cell();
    let mut run = 0;
    let mut cur = coord;
    while let Some(next) = step(cur, dir) {
        match board.get(next) {
            c if c == opp => run += 1,
            c if c == own => return run,
            _ => return 0,
        }
        cur = next;
    }
    0
}

/// Check whether `side` may play at `coord`.
pub fn is_legal(board: &Board, side: Side, coord: Coord) -> bool {
    if board.get(coord) != Cell::Empty {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&dir| bracket_len(board, side, coord, dir) > 0)
}

/// All legal moves for `side`, in row-major order.
///
/// The order is what the engine uses to break ties, so it must stay stable.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Coord> {
    Board::coords()
        .filter(|&pt| is_legal(board, side, pt))
        .collect()
}

/// True if `side` has at least one legal move.
pub fn has_legal_moves(board: &Board, side: Side) -> bool {
    Board::coords().any(|pt| is_legal(board, side, pt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stays_on_board() {
        assert_eq!(step((0, 0), (-1, 0)), None);
        assert_eq!(step((0, 0), (0, -1)), None);
        assert_eq!(step((7, 7), (1, 1)), None);
        assert_eq!(step((3, 3), (1, -1)), Some((4, 2)));
    }

    #[test]
    fn test_initial_legal_moves_black() {
        let board = Board::new();
        assert_eq!(
            legal_moves(&board, Side::Black),
            vec![(2, 4), (3, 5), (4, 2), (5, 3)]
        );
    }

    #[test]
    fn test_initial_legal_moves_white() {
        let board = Board::new();
        assert_eq!(
            legal_moves(&board, Side::White),
            vec![(2, 3), (3, 2), (4, 5), (5, 4)]
        );
    }

    #[test]
    fn test_adjacent_own_disc_is_not_a_bracket() {
        // (2,3) sits directly above Black's (3,3): no opponent disc between.
        let board = Board::new();
        assert_eq!(bracket_len(&board, Side::Black, (2, 3), (1, 0)), 0);
        assert!(!is_legal(&board, Side::Black, (2, 3)));
    }

    #[test]
    fn test_occupied_cell_is_illegal() {
        let board = Board::new();
        assert!(!is_legal(&board, Side::Black, (3, 4)));
        assert!(!is_legal(&board, Side::White, (3, 3)));
    }

    #[test]
    fn test_run_off_edge_is_not_a_bracket() {
        let mut board = Board::empty(Side::Black);
        board.set((0, 1), Cell::White);
        board.set((0, 2), Cell::White);
        // Scanning west from (0,3) leaves the board after two White discs.
        assert_eq!(bracket_len(&board, Side::Black, (0, 3), (0, -1)), 0);
        assert!(!is_legal(&board, Side::Black, (0, 3)));

        board.set((0, 0), Cell::Black);
        assert_eq!(bracket_len(&board, Side::Black, (0, 3), (0, -1)), 2);
        assert!(is_legal(&board, Side::Black, (0, 3)));
    }

    #[test]
    fn test_has_legal_moves_empty_board() {
        let board = Board::empty(Side::Black);
        assert!(!has_legal_moves(&board, Side::Black));
        assert!(!has_legal_moves(&board, Side::White));
        assert!(has_legal_moves(&Board::new(), Side::Black));
    }
}
