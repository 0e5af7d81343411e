//! Fixed-depth minimax search with alpha-beta pruning
//!
//! Every node explores its moves on a private clone of the board
//! (`Board::after_move`); the parent board is never modified.

use chess_core::{legal_moves, Board, Color, Move, TimeControl, MIN_DEPTH};
use tracing::{debug, trace};

use crate::eval::evaluate;

/// Value of a checkmate found inside the horizon, from the root side's view.
pub const MATE_SCORE: f64 = 10_000.0;

/// Result from pick_best_move indicating whether search completed or was stopped.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    /// Best move found and its value (None if the side has no legal moves)
    pub best_move: Option<(Move, f64)>,
    /// True if search was stopped early through the time control
    pub stopped: bool,
}

/// Searches `board` for `side` and returns the best move with its value.
///
/// Root moves are compared in enumeration order and only a strictly better
/// value replaces the incumbent, so the first of several equal moves wins.
/// The root tightens `alpha` as it goes; this prunes more below the root
/// without changing which move is chosen or its value.
///
/// If the search is stopped before any root move is fully searched, the
/// first legal move is returned with the static evaluation of `board` so
/// callers always get a playable move and a finite value.
///
/// # Arguments
/// * `board` - The position to search
/// * `side` - The side to find a move for
/// * `depth` - Search depth in plies, at least `MIN_DEPTH` (callers clamp
///   through `SearchLimits::clamp_depth`)
/// * `nodes` - Counter for nodes searched (for statistics)
/// * `tc` - Checked between sibling moves; stops the search when set
pub fn pick_best_move(
    board: &Board,
    side: Color,
    depth: u8,
    nodes: &mut u64,
    tc: &TimeControl,
) -> SearchOutcome {
    debug_assert!(depth >= MIN_DEPTH, "search depth {depth} below {MIN_DEPTH}");

    let moves = legal_moves(board, side);
    let Some(&first) = moves.first() else {
        return SearchOutcome {
            best_move: None,
            stopped: false,
        };
    };

    let mut best = first;
    let mut best_score = f64::NEG_INFINITY;
    let mut alpha = f64::NEG_INFINITY;
    let mut searched = 0usize;
    let mut stopped = false;

    for mv in moves {
        if tc.check_time() {
            stopped = true;
            break;
        }

        let child = board.after_move(mv);
        *nodes += 1;

        let (score, was_stopped) = minimax(
            &child,
            depth.saturating_sub(1),
            false,
            side,
            alpha,
            f64::INFINITY,
            nodes,
            tc,
        );

        if was_stopped {
            stopped = true;
            break;
        }
        trace!(%mv, score, "root move searched");
        searched += 1;

        if score > best_score {
            best_score = score;
            best = mv;
        }
        alpha = alpha.max(score);
    }

    if searched == 0 {
        best_score = evaluate(board, side);
    }

    debug!(best = %best, score = best_score, depth, nodes = *nodes, searched, stopped, "search finished");
    SearchOutcome {
        best_move: Some((best, best_score)),
        stopped,
    }
}

/// Recursive minimax with alpha-beta pruning.
///
/// `maximizing` nodes move for `root`, minimizing nodes for its opponent.
/// Values are always from `root`'s point of view.
///
/// Returns (value, stopped) where stopped indicates the search was cancelled.
#[allow(clippy::too_many_arguments)]
pub(crate) fn minimax(
    board: &Board,
    depth: u8,
    maximizing: bool,
    root: Color,
    mut alpha: f64,
    mut beta: f64,
    nodes: &mut u64,
    tc: &TimeControl,
) -> (f64, bool) {
    if depth == 0 {
        return (evaluate(board, root), false);
    }

    let to_move = if maximizing { root } else { root.other() };
    let moves = legal_moves(board, to_move);

    if moves.is_empty() {
        if board.in_check(to_move) {
            // Being mated is the worst outcome for whoever is mated
            let mate = if maximizing { -MATE_SCORE } else { MATE_SCORE };
            return (mate, false);
        }
        return (0.0, false); // Stalemate
    }

    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };

    for mv in moves {
        if tc.check_time() {
            return (best, true);
        }

        let child = board.after_move(mv);
        *nodes += 1;

        let (score, stopped) = minimax(
            &child,
            depth - 1,
            !maximizing,
            root,
            alpha,
            beta,
            nodes,
            tc,
        );
        if stopped {
            return (best, true);
        }

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if beta <= alpha {
            break; // cutoff
        }
    }

    (best, false)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
