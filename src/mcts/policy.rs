//! Rollout policies.
//!
//! A rollout plays a board to a terminal state and returns the result. It
//! only produces a reward signal; nothing it plays is stored in the tree.

use crate::error::MoveError;
use crate::game::{Board, Outcome, Player, COLS};
use crate::rng::SearchRng;

/// Policy for playing out a position to a terminal state.
pub trait RolloutPolicy: Send + Sync {
    /// Play `board` to completion, returning the game result.
    fn rollout(&self, board: Board, rng: &mut SearchRng) -> Result<Outcome, MoveError>;
}

/// Uniformly random rollout: both sides play random legal moves until the
/// game ends.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomRollout;

impl RolloutPolicy for RandomRollout {
    fn rollout(&self, mut board: Board, rng: &mut SearchRng) -> Result<Outcome, MoveError> {
        loop {
            if let Some(outcome) = board.outcome() {
                return Ok(outcome);
            }

            let moves = board.legal_moves();
            let col = moves[rng.gen_range_usize(0..moves.len())];
            board.drop_piece(col, board.to_move())?;
        }
    }
}

/// Lightweight tactical rollout: take an immediate win, block the
/// opponent's immediate win, otherwise prefer center columns with a random
/// tie-break.
///
/// Stronger reward signal than [`RandomRollout`] at the cost of a few extra
/// win checks per ply.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicRollout;

impl RolloutPolicy for HeuristicRollout {
    fn rollout(&self, mut board: Board, rng: &mut SearchRng) -> Result<Outcome, MoveError> {
        loop {
            if let Some(outcome) = board.outcome() {
                return Ok(outcome);
            }

            let col = select_heuristic_move(&board, rng)?;
            board.drop_piece(col, board.to_move())?;
        }
    }
}

/// Pick a move for the side to move: win, block, or center-closest.
fn select_heuristic_move(board: &Board, rng: &mut SearchRng) -> Result<usize, MoveError> {
    let moves = board.legal_moves();
    let me = board.to_move();
    let opponent = me.opponent();

    for &col in &moves {
        if wins_if_played(board, col, me)? {
            return Ok(col);
        }
    }

    for &col in &moves {
        if wins_if_played(board, col, opponent)? {
            return Ok(col);
        }
    }

    let center = (COLS / 2) as i32;
    let best_distance = moves
        .iter()
        .map(|&c| (c as i32 - center).unsigned_abs())
        .min()
        .unwrap_or(0);
    let candidates: Vec<usize> = moves
        .iter()
        .copied()
        .filter(|&c| (c as i32 - center).unsigned_abs() == best_distance)
        .collect();

    Ok(*rng.choose(&candidates).unwrap_or(&moves[0]))
}

/// Would dropping `player`'s piece into `col` win on the spot?
fn wins_if_played(board: &Board, col: usize, player: Player) -> Result<bool, MoveError> {
    let mut copy = *board;
    let row = copy.drop_piece(col, player)?;
    Ok(copy.win_at(row, col))
}

/// Map a game result to a reward for `player`: +1 win, 0 draw, -1 loss.
#[must_use]
pub fn outcome_reward(outcome: Outcome, player: Player) -> f64 {
    match outcome {
        Outcome::Win(winner) if winner == player => 1.0,
        Outcome::Win(_) => -1.0,
        Outcome::Draw => 0.0,
    }
}
