//! Turn-taking text loop.
//!
//! Prints the board and status before every turn, reads `"row col"` lines
//! for human players, and asks the engine (or a random mover) for the other
//! side. The loop is generic over its reader and writer so it can be driven
//! from tests.
//!
//! ## Example
//!
//! ```ignore
//! use othello_rust::game::{Game, Player};
//! use othello_rust::search::SearchConfig;
//!
//! let mut game = Game::new(Player::Human, Player::Engine(SearchConfig::default()));
//! let outcome = game.run()?;
//! println!("{outcome}");
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};
use tracing::info;

use crate::board::{Board, Coord, Outcome, Side, parse_coord, str_coord};
use crate::movegen::{is_legal, legal_moves};
use crate::moves::apply_move;
use crate::search::{PassRule, SearchConfig, choose_move, random_move};

const PROMPT: &str = "Enter row and column (0-7) separated by space: ";
const BAD_INPUT: &str =
    "Invalid input. Please enter two numbers between 0 and 7, separated by a space.";
const BAD_MOVE: &str = "Invalid move. Try again.";

/// Who chooses the moves for one side.
#[derive(Debug)]
pub enum Player {
    /// Moves are read from the input stream.
    Human,
    /// Moves come from the alpha-beta engine.
    Engine(SearchConfig),
    /// Uniformly random legal moves.
    Random(fastrand::Rng),
}

/// A game between two players on one board.
pub struct Game {
    board: Board,
    black: Player,
    white: Player,
    pass_rule: PassRule,
    /// Print the board and status before every turn.
    verbose: bool,
}

impl Game {
    /// A game from the starting position. The pass rule is taken from the
    /// first engine player, if any.
    pub fn new(black: Player, white: Player) -> Self {
        let pass_rule = [&black, &white]
            .into_iter()
            .find_map(|p| match p {
                Player::Engine(config) => Some(config.pass_rule),
                _ => None,
            })
            .unwrap_or_default();
        Self {
            board: Board::new(),
            black,
            white,
            pass_rule,
            verbose: true,
        }
    }

    /// Override the pass rule used by the loop itself.
    pub fn with_pass_rule(mut self, pass_rule: PassRule) -> Self {
        self.pass_rule = pass_rule;
        self
    }

    /// Only print moves and the result, not the board before every turn.
    pub fn quiet(mut self) -> Self {
        self.verbose = false;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play on stdin/stdout until the game ends.
    pub fn run(&mut self) -> anyhow::Result<Outcome> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Play until the game ends, reading human moves from `input`.
    pub fn run_with<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut out: W,
    ) -> anyhow::Result<Outcome> {
        loop {
            let side = self.board.side_to_move();
            let moves = legal_moves(&self.board, side);

            if moves.is_empty() {
                if self.pass_rule.is_terminal(&self.board) {
                    break;
                }
                info!(%side, "no legal move, passing");
                writeln!(out, "{side} has no legal move and passes.")?;
                self.board.pass();
                continue;
            }

            if self.verbose {
                self.print_status(&mut out, side, &moves)?;
            }

            let player = match side {
                Side::Black => &mut self.black,
                Side::White => &mut self.white,
            };
            let mv = match player {
                Player::Human => Self::read_human_move(&self.board, side, &mut input, &mut out)?,
                Player::Engine(config) => {
                    // The budget may expire before any candidate; fall back
                    // to the first legal move so the game can continue.
                    let mv = choose_move(&mut self.board, config).best.unwrap_or(moves[0]);
                    writeln!(out, "{side} plays {}", str_coord(mv))?;
                    mv
                }
                Player::Random(rng) => {
                    let mv = random_move(&self.board, rng).unwrap_or(moves[0]);
                    writeln!(out, "{side} plays {}", str_coord(mv))?;
                    mv
                }
            };
            let record = apply_move(&mut self.board, side, mv);
            if record.is_empty() {
                bail!("{side} chose illegal move {}", str_coord(mv));
            }
        }

        let outcome = self.board.outcome();
        let (black, white) = self.board.piece_counts();
        info!(black, white, %outcome, "game over");
        write!(out, "{}", self.board)?;
        writeln!(out)?;
        writeln!(out, "{outcome}")?;
        out.flush()?;
        Ok(outcome)
    }

    fn print_status<W: Write>(&self, out: &mut W, side: Side, moves: &[Coord]) -> io::Result<()> {
        let (black, white) = self.board.piece_counts();
        let listed: Vec<String> = moves.iter().map(|&m| str_coord(m)).collect();
        write!(out, "{}", self.board)?;
        writeln!(out)?;
        writeln!(out, "Current player: {side}")?;
        writeln!(out, "Score - Black: {black}, White: {white}")?;
        writeln!(out, "Available moves ({}): [{}]", moves.len(), listed.join(", "))?;
        Ok(())
    }

    /// Prompt until the human enters a legal move.
    fn read_human_move<R: BufRead, W: Write>(
        board: &Board,
        side: Side,
        input: &mut R,
        out: &mut W,
    ) -> anyhow::Result<Coord> {
        let mut line = String::new();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            line.clear();
            let read = input.read_line(&mut line).context("reading move")?;
            if read == 0 {
                bail!("input closed while waiting for {side}'s move");
            }

            match parse_coord(&line) {
                Ok(mv) if is_legal(board, side, mv) => return Ok(mv),
                Ok(_) => writeln!(out, "{BAD_MOVE}")?,
                Err(_) => writeln!(out, "{BAD_INPUT}")?,
            }
        }
    }
}
