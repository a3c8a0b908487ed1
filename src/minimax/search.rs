//! Negamax alpha-beta search over the board's drop/undo stack.

use std::time::Instant;

use smallvec::SmallVec;

use crate::error::{MoveError, SearchError};
use crate::eval::{evaluate_with, WIN_SCORE};
use crate::game::{Board, Player, COLS};
use crate::stats::SearchStats;

use super::config::MinimaxConfig;

/// Score bound; every real score fits strictly inside (-INF, INF).
const INF: i32 = i32::MAX;

/// Minimax move selection with alpha-beta pruning.
///
/// Holds only configuration; no state persists across calls.
pub struct MinimaxEngine {
    config: MinimaxConfig,
}

impl MinimaxEngine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub fn new(config: MinimaxConfig) -> Self {
        Self { config }
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }

    /// Select the best column for `player` on `board`.
    ///
    /// Ties among equal-scored moves go to the first one encountered in the
    /// fixed center-first order, so results are reproducible.
    ///
    /// # Errors
    ///
    /// [`SearchError::TerminalBoard`] if the board already has a winner;
    /// [`SearchError::NoLegalMove`] if the board is full.
    pub fn select_move(
        &self,
        board: &Board,
        player: Player,
    ) -> Result<(usize, SearchStats), SearchError> {
        let start = Instant::now();
        let mut stats = SearchStats::new();

        if let Some(winner) = board.check_winner() {
            return Err(SearchError::TerminalBoard { winner });
        }

        let moves = ordered_moves(board);
        if moves.is_empty() {
            return Err(SearchError::NoLegalMove);
        }

        debug_assert_eq!(board.to_move(), player, "searching out of turn");

        // Forced move: nothing to search.
        if moves.len() == 1 {
            stats.time_us = start.elapsed().as_micros() as u64;
            return Ok((moves[0], stats));
        }

        let depth = self.config.depth.max(1);
        let mut scratch = *board;

        stats.nodes_visited += 1; // root

        let mut best_col = moves[0];
        let mut best_score = -INF;
        let mut alpha = -INF;

        for &col in &moves {
            scratch.drop_piece(col, player)?;
            let score = -self.negamax(&mut scratch, depth - 1, 1, -INF, -alpha, &mut stats)?;
            scratch.undo(col)?;

            if score > best_score {
                best_score = score;
                best_col = col;
            }
            if self.config.pruning && score > alpha {
                alpha = score;
            }
        }

        stats.time_us = start.elapsed().as_micros() as u64;
        Ok((best_col, stats))
    }

    /// Fail-soft negamax. Returns the score of the position for the side to
    /// move; won positions score `WIN_SCORE - ply` so nearer wins rank
    /// higher.
    fn negamax(
        &self,
        board: &mut Board,
        depth: u32,
        ply: u32,
        mut alpha: i32,
        beta: i32,
        stats: &mut SearchStats,
    ) -> Result<i32, MoveError> {
        stats.nodes_visited += 1;

        // The previous move may have ended the game; the side to move lost.
        if let Some((row, col)) = board.last_move() {
            if board.win_at(row, col) {
                return Ok(-(WIN_SCORE - ply as i32));
            }
        }

        if board.is_full() {
            return Ok(0);
        }

        if depth == 0 {
            return Ok(evaluate_with(board, board.to_move(), &self.config.weights));
        }

        let mover = board.to_move();
        let mut best = -INF;

        for col in ordered_moves(board) {
            board.drop_piece(col, mover)?;
            let score = -self.negamax(board, depth - 1, ply + 1, -beta, -alpha, stats)?;
            board.undo(col)?;

            if score > best {
                best = score;
            }
            if score > alpha {
                alpha = score;
            }
            if self.config.pruning && alpha >= beta {
                stats.prunes += 1;
                break;
            }
        }

        Ok(best)
    }
}

/// Legal moves in the fixed center-first order 3, 2, 4, 1, 5, 0, 6.
///
/// Center columns pass through more four-in-a-row windows, so searching them
/// first tightens alpha-beta bounds early. The order is deterministic, which
/// also fixes tie-breaking.
fn ordered_moves(board: &Board) -> SmallVec<[usize; COLS]> {
    let mut moves = board.legal_moves();
    let center = (COLS / 2) as i32;
    moves.sort_by_key(|&c| ((c as i32 - center).unsigned_abs(), c));
    moves
}
