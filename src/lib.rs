//! Othello-Rust: an Othello (Reversi) engine with an alpha-beta opponent.
//!
//! The engine keeps a single [`board::Board`] and explores the game tree by
//! applying and undoing moves in place, so no position is ever copied during
//! search.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, evaluation weights, search defaults
//! - [`board`] - Cells, sides, the board itself, coordinate parsing
//! - [`movegen`] - Move legality and legal move enumeration
//! - [`moves`] - Apply/undo of a move with its flip record
//! - [`eval`] - Static position evaluation
//! - [`search`] - Minimax with alpha-beta and the engine move selector
//! - [`game`] - Turn-taking text loop
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//!
//! use othello_rust::board::Board;
//! use othello_rust::moves::apply_move;
//! use othello_rust::search::ai_move;
//!
//! let mut board = Board::new();
//!
//! // Black opens
//! let side = board.side_to_move();
//! apply_move(&mut board, side, (2, 4));
//!
//! // Let the engine answer for White
//! let reply = ai_move(&mut board, 3, Duration::from_secs(2));
//! println!("White plays {reply:?}");
//! ```

pub mod board;
pub mod constants;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod moves;
pub mod search;
