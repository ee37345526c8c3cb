//! Minimax search with alpha-beta pruning, and the engine's move selector.
//!
//! The search works on one [`Board`] in place, applying and undoing moves in
//! strict stack order. Scores are taken from the point of view of the side
//! that was to move at the root: `maximizing` is true whenever that side is
//! to move again.
//!
//! The time budget is checked only between root candidates. Once a
//! candidate's subtree search starts it runs to completion.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::board::{Board, Coord};
use crate::constants::{DEFAULT_DEPTH, DEFAULT_TIME_BUDGET_MS};
use crate::eval::evaluate_for;
use crate::movegen::{has_legal_moves, legal_moves};
use crate::moves::{apply_move, undo_move};

/// Search score, from the root side's point of view.
pub type Score = i32;

/// Lower bound sentinel for alpha-beta.
pub const NEG_INF: Score = Score::MIN;

/// Upper bound sentinel for alpha-beta.
pub const POS_INF: Score = Score::MAX;

/// What happens when the side to move has no legal move.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PassRule {
    /// The position is terminal, exactly as if the game were over.
    #[default]
    Stall,
    /// The mover passes; the position is terminal only if neither side
    /// can move (standard Othello).
    Pass,
}

impl PassRule {
    /// True if the side to move on `board` ends the game (or search line)
    /// under this rule.
    pub fn is_terminal(self, board: &Board) -> bool {
        let side = board.side_to_move();
        if has_legal_moves(board, side) {
            return false;
        }
        match self {
            PassRule::Stall => true,
            PassRule::Pass => !has_legal_moves(board, side.opposite()),
        }
    }
}

/// Tunables for one engine move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below each root candidate.
    pub depth: u32,
    /// Wall-clock budget, checked before each root candidate.
    pub time_budget: Duration,
    pub pass_rule: PassRule,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            time_budget: Duration::from_millis(DEFAULT_TIME_BUDGET_MS),
            pass_rule: PassRule::default(),
        }
    }
}

/// Outcome of [`choose_move`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, or `None` if there was no legal move or the budget
    /// ran out before the first candidate.
    pub best: Option<Coord>,
    /// Score of `best`.
    pub score: Option<Score>,
    /// Root candidates fully searched.
    pub evaluated: usize,
    /// Nodes visited, counting every call into the search.
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Alpha-beta searcher. Holds the pass rule and a node counter.
#[derive(Debug, Default)]
pub struct Search {
    pass_rule: PassRule,
    nodes: u64,
}

impl Search {
    pub fn new(pass_rule: PassRule) -> Self {
        Self {
            pass_rule,
            nodes: 0,
        }
    }

    /// Nodes visited since this searcher was created.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Minimax value of `board` searched `depth` plies deep.
    ///
    /// `board` is restored to its original state before returning.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Score {
        self.nodes += 1;
        let side = board.side_to_move();
        let root_side = if maximizing { side } else { side.opposite() };

        if depth == 0 {
            return evaluate_for(board, root_side);
        }

        let moves = legal_moves(board, side);
        if moves.is_empty() {
            if self.pass_rule.is_terminal(board) {
                return evaluate_for(board, root_side);
            }
            board.pass();
            let score = self.minimax(board, depth - 1, alpha, beta, !maximizing);
            board.pass();
            return score;
        }

        let mut best = if maximizing { NEG_INF } else { POS_INF };
        for mv in moves {
            let record = apply_move(board, side, mv);
            if record.is_empty() {
                continue;
            }
            let score = self.minimax(board, depth - 1, alpha, beta, !maximizing);
            undo_move(board, side, mv, &record);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Minimax with alpha-beta under the default pass rule.
pub fn minimax(board: &mut Board, depth: u32, alpha: Score, beta: Score, maximizing: bool) -> Score {
    Search::default().minimax(board, depth, alpha, beta, maximizing)
}

/// Pick a move for the side to move on `board`.
///
/// Candidates are tried in generator order and each is scored by a search
/// `config.depth` plies below it. On equal scores the earlier candidate wins.
pub fn choose_move(board: &mut Board, config: &SearchConfig) -> SearchResult {
    let start = Instant::now();
    let side = board.side_to_move();
    let mut search = Search::new(config.pass_rule);
    let mut best: Option<(Coord, Score)> = None;
    let mut evaluated = 0;

    for mv in legal_moves(board, side) {
        if start.elapsed() > config.time_budget {
            debug!(
                budget_ms = config.time_budget.as_millis() as u64,
                evaluated, "time budget exhausted"
            );
            break;
        }
        let record = apply_move(board, side, mv);
        if record.is_empty() {
            continue;
        }
        let score = search.minimax(board, config.depth, NEG_INF, POS_INF, false);
        undo_move(board, side, mv, &record);
        evaluated += 1;
        trace!(row = mv.0, col = mv.1, score, "root candidate");

        if best.is_none_or(|(_, s)| score > s) {
            best = Some((mv, score));
        }
    }

    let result = SearchResult {
        best: best.map(|(mv, _)| mv),
        score: best.map(|(_, s)| s),
        evaluated,
        nodes: search.nodes(),
        elapsed: start.elapsed(),
    };
    debug!(
        %side,
        best = ?result.best,
        score = ?result.score,
        nodes = result.nodes,
        evaluated = result.evaluated,
        elapsed_ms = result.elapsed.as_millis() as u64,
        "engine move"
    );
    result
}

/// The engine's move for the side to move, or `None` if it has none.
pub fn ai_move(board: &mut Board, depth: u32, time_budget: Duration) -> Option<Coord> {
    let config = SearchConfig {
        depth,
        time_budget,
        ..SearchConfig::default()
    };
    choose_move(board, &config).best
}

/// A uniformly random legal move for the side to move.
pub fn random_move(board: &Board, rng: &mut fastrand::Rng) -> Option<Coord> {
    let moves = legal_moves(board, board.side_to_move());
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.usize(..moves.len())])
}
