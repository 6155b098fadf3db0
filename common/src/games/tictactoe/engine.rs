//! Exhaustive minimax search with optional alpha-beta pruning.
//!
//! The engine always plays the maximizing side. Scores are depth-adjusted
//! (`10 - depth` for a win, `-10 + depth` for a loss, `0` for a draw) so a faster win
//! and a slower loss are preferred.
//!
//! Scaling limit: the search expands the full game tree below the given position. On a
//! 3x3 board that is at most 9! leaf paths (549,946 nodes from the empty board without
//! pruning), but the tree grows factorially with the number of empty cells. Larger boards
//! would need a depth limit and a heuristic evaluation instead of this search.

use std::time::{Duration, Instant};

use super::board::Board;
use super::types::Mark;

pub const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub pruning: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { pruning: true }
    }
}

/// Result of one engine invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionRecord {
    /// `None` when the board has no legal move left.
    pub position: Option<usize>,
    pub score: i32,
    pub states_visited: u64,
    /// Cutoffs that skipped at least one unvisited sibling.
    pub cutoffs: u64,
    pub elapsed: Duration,
}

impl DecisionRecord {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

struct SearchContext {
    max_mark: Mark,
    min_mark: Mark,
    pruning: bool,
    states_visited: u64,
    cutoffs: u64,
}

/// Picks the best move for `engine_mark`, which is treated as the side to move.
///
/// # Panics
///
/// Panics if `engine_mark` is `Mark::Empty` or if the board already has a winner.
/// Both are caller bugs: the driver must stop asking for moves once a game is over.
pub fn find_best_move(board: &Board, engine_mark: Mark, pruning: bool) -> DecisionRecord {
    search(board, engine_mark, SearchOptions { pruning })
}

/// Same as [`find_best_move`], taking the options as a struct.
pub fn search(board: &Board, engine_mark: Mark, options: SearchOptions) -> DecisionRecord {
    let Some(opponent_mark) = engine_mark.opponent() else {
        panic!("engine mark must be X or O");
    };
    if let Some(winner) = board.winner() {
        panic!("search invoked on a finished game: {} has already won", winner);
    }

    let started = Instant::now();
    let mut ctx = SearchContext {
        max_mark: engine_mark,
        min_mark: opponent_mark,
        pruning: options.pruning,
        states_visited: 1,
        cutoffs: 0,
    };

    let mut best_score = i32::MIN;
    let mut best_position = None;

    if board.is_full() {
        best_score = 0;
    } else {
        let mut alpha = i32::MIN;
        let beta = i32::MAX;
        let moves = board.legal_moves();

        for (i, &position) in moves.iter().enumerate() {
            let mut child = *board;
            child.set(position, engine_mark);

            let score = minimax(&child, opponent_mark, 1, alpha, beta, &mut ctx);

            if score > best_score {
                best_score = score;
                best_position = Some(position);
            }

            alpha = alpha.max(score);
            if ctx.pruning && beta <= alpha {
                if i + 1 < moves.len() {
                    ctx.cutoffs += 1;
                }
                break;
            }
        }
    }

    DecisionRecord {
        position: best_position,
        score: best_score,
        states_visited: ctx.states_visited,
        cutoffs: ctx.cutoffs,
        elapsed: started.elapsed(),
    }
}

fn minimax(
    board: &Board,
    to_move: Mark,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.states_visited += 1;

    if board.has_won(ctx.min_mark) {
        return -WIN_SCORE + depth;
    }
    if board.has_won(ctx.max_mark) {
        return WIN_SCORE - depth;
    }
    if board.is_full() {
        return 0;
    }

    let maximizing = to_move == ctx.max_mark;
    let next_mark = if maximizing { ctx.min_mark } else { ctx.max_mark };
    let moves = board.legal_moves();
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for (i, &position) in moves.iter().enumerate() {
        let mut child = *board;
        child.set(position, to_move);

        let score = minimax(&child, next_mark, depth + 1, alpha, beta, ctx);

        if maximizing {
            if score > best {
                best = score;
            }
            alpha = alpha.max(score);
        } else {
            if score < best {
                best = score;
            }
            beta = beta.min(score);
        }

        if ctx.pruning && beta <= alpha {
            if i + 1 < moves.len() {
                ctx.cutoffs += 1;
            }
            break;
        }
    }

    best
}
