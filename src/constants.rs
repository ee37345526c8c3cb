//! Constants for board geometry, evaluation weights, and search defaults.
//!
//! The board is a fixed 8x8 grid addressed by `(row, col)` pairs. Nothing
//! here is reconfigurable at runtime; the search depth and time budget are
//! only defaults that the command line may override.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 8;

/// Total number of cells on the board.
pub const CELLS: usize = N * N;

/// Offsets `(d_row, d_col)` for the 8 compass directions.
/// Order: NW, N, NE, W, E, SW, S, SE
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// =============================================================================
// Initial Position
// =============================================================================

/// Black discs in the starting position.
pub const INITIAL_BLACK: [(usize, usize); 2] = [(3, 3), (4, 4)];

/// White discs in the starting position.
pub const INITIAL_WHITE: [(usize, usize); 2] = [(3, 4), (4, 3)];

// =============================================================================
// Evaluation Weights
// =============================================================================

/// Weight of a corner cell. Corners can never be flipped once taken.
pub const WEIGHT_CORNER: i32 = 100;

/// Weight of a cell touching a corner (orthogonally or diagonally).
/// Negative: holding one while the corner is empty tends to give it away.
pub const WEIGHT_CORNER_ADJACENT: i32 = -25;

/// Weight of the remaining edge cells.
pub const WEIGHT_EDGE: i32 = 10;

// =============================================================================
// Search Defaults
// =============================================================================

/// Default search depth in plies, not counting the root move.
pub const DEFAULT_DEPTH: u32 = 3;

/// Default wall-clock budget for one engine move, in milliseconds.
pub const DEFAULT_TIME_BUDGET_MS: u64 = 2000;
