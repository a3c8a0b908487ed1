//! Handcrafted board evaluation.
//!
//! Scores a board from one player's perspective by enumerating every
//! length-4 window along the four line orientations and summing per-window
//! pattern scores, plus a small center-occupancy bonus.
//!
//! The function is exactly antisymmetric:
//! `evaluate(b, p) == -evaluate(b, p.opponent())` for every board. Each
//! pattern carries a single weight mirrored in sign for the opponent, so the
//! minimax engine can negate scores when switching perspective.

use serde::{Deserialize, Serialize};

use crate::game::{Board, Player, COLS, ROWS};

/// Sentinel score for a decided board. Heuristic scores stay orders of
/// magnitude below this, so win/loss always dominates.
pub const WIN_SCORE: i32 = 1_000_000;

/// Tunable pattern weights. The shape (win > open three > open two) is
/// fixed; the numbers are configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Three own pieces plus one empty cell in a window.
    pub open_three: i32,

    /// Two own pieces plus two empty cells in a window.
    pub open_two: i32,

    /// Per-disc bonus for occupying the center column.
    pub center: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            open_three: 50,
            open_two: 5,
            center: 3,
        }
    }
}

/// Evaluate `board` from `perspective` with default weights.
#[must_use]
pub fn evaluate(board: &Board, perspective: Player) -> i32 {
    evaluate_with(board, perspective, &EvalWeights::default())
}

/// Evaluate `board` from `perspective` with explicit weights.
///
/// A decided board scores ±[`WIN_SCORE`]; otherwise the sum of window
/// pattern scores plus the center bonus, positive when `perspective` is
/// ahead.
#[must_use]
pub fn evaluate_with(board: &Board, perspective: Player, weights: &EvalWeights) -> i32 {
    if let Some(winner) = board.check_winner() {
        return if winner == perspective {
            WIN_SCORE
        } else {
            -WIN_SCORE
        };
    }

    let mut score = 0;

    // Horizontal windows
    for row in 0..ROWS {
        for col in 0..=COLS - 4 {
            let window = [0, 1, 2, 3].map(|i| board.cell(row, col + i));
            score += score_window(window, perspective, weights);
        }
    }

    // Vertical windows
    for col in 0..COLS {
        for row in 0..=ROWS - 4 {
            let window = [0, 1, 2, 3].map(|i| board.cell(row + i, col));
            score += score_window(window, perspective, weights);
        }
    }

    // Diagonal ↘ windows
    for row in 0..=ROWS - 4 {
        for col in 0..=COLS - 4 {
            let window = [0, 1, 2, 3].map(|i| board.cell(row + i, col + i));
            score += score_window(window, perspective, weights);
        }
    }

    // Diagonal ↗ windows
    for row in 3..ROWS {
        for col in 0..=COLS - 4 {
            let window = [0, 1, 2, 3].map(|i| board.cell(row - i, col + i));
            score += score_window(window, perspective, weights);
        }
    }

    // Center occupancy, net of both players.
    let center = COLS / 2;
    for row in 0..ROWS {
        match board.cell(row, center) {
            Some(p) if p == perspective => score += weights.center,
            Some(_) => score -= weights.center,
            None => {}
        }
    }

    score
}

/// Score one length-4 window. Windows containing both players' pieces are
/// dead and score 0.
fn score_window(window: [Option<Player>; 4], perspective: Player, weights: &EvalWeights) -> i32 {
    let mut own = 0;
    let mut opp = 0;
    let mut empty = 0;

    for cell in window {
        match cell {
            Some(p) if p == perspective => own += 1,
            Some(_) => opp += 1,
            None => empty += 1,
        }
    }

    if own > 0 && opp > 0 {
        return 0;
    }

    match (own, opp, empty) {
        (3, 0, 1) => weights.open_three,
        (2, 0, 2) => weights.open_two,
        (0, 3, 1) => -weights.open_three,
        (0, 2, 2) => -weights.open_two,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from_drops(drops: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(col, player) in drops {
            board.drop_piece(col, player).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Player::Red), 0);
        assert_eq!(evaluate(&board, Player::Yellow), 0);
    }

    #[test]
    fn test_antisymmetry() {
        let board = board_from_drops(&[
            (3, Player::Red),
            (2, Player::Yellow),
            (3, Player::Red),
            (4, Player::Yellow),
            (5, Player::Red),
        ]);

        assert_eq!(
            evaluate(&board, Player::Red),
            -evaluate(&board, Player::Yellow)
        );
    }

    #[test]
    fn test_center_bonus() {
        let board = board_from_drops(&[(3, Player::Red)]);
        let w = EvalWeights::default();

        // One center disc plus the open windows it creates.
        let score = evaluate(&board, Player::Red);
        assert!(score >= w.center);
        assert_eq!(score, -evaluate(&board, Player::Yellow));
    }

    #[test]
    fn test_open_three_outscores_open_two() {
        let three = board_from_drops(&[
            (0, Player::Red),
            (5, Player::Yellow),
            (1, Player::Red),
            (6, Player::Yellow),
            (2, Player::Red),
            (6, Player::Yellow),
        ]);
        let two = board_from_drops(&[
            (0, Player::Red),
            (5, Player::Yellow),
            (1, Player::Red),
            (6, Player::Yellow),
        ]);

        assert!(evaluate(&three, Player::Red) > evaluate(&two, Player::Red));
    }

    #[test]
    fn test_opponent_threat_scores_negative() {
        let board = board_from_drops(&[
            (0, Player::Yellow),
            (6, Player::Red),
            (1, Player::Yellow),
            (6, Player::Red),
            (2, Player::Yellow),
        ]);

        // Yellow has an open three on the bottom row; Red pieces sit in a
        // corner stack. Red should judge this position as losing ground.
        assert!(evaluate(&board, Player::Red) < 0);
    }

    #[test]
    fn test_won_board_is_sentinel() {
        let board = board_from_drops(&[
            (0, Player::Red),
            (0, Player::Yellow),
            (1, Player::Red),
            (1, Player::Yellow),
            (2, Player::Red),
            (2, Player::Yellow),
            (3, Player::Red),
        ]);

        assert_eq!(evaluate(&board, Player::Red), WIN_SCORE);
        assert_eq!(evaluate(&board, Player::Yellow), -WIN_SCORE);
    }

    #[test]
    fn test_dead_window_scores_zero() {
        // Window with both players' pieces contributes nothing.
        assert_eq!(
            score_window(
                [
                    Some(Player::Red),
                    Some(Player::Yellow),
                    Some(Player::Red),
                    None
                ],
                Player::Red,
                &EvalWeights::default()
            ),
            0
        );
    }

    #[test]
    fn test_window_patterns() {
        let w = EvalWeights::default();
        let r = Some(Player::Red);
        let y = Some(Player::Yellow);

        assert_eq!(score_window([r, r, r, None], Player::Red, &w), w.open_three);
        assert_eq!(score_window([r, None, r, None], Player::Red, &w), w.open_two);
        assert_eq!(
            score_window([y, y, y, None], Player::Red, &w),
            -w.open_three
        );
        assert_eq!(
            score_window([None, y, None, y], Player::Red, &w),
            -w.open_two
        );
        assert_eq!(score_window([None; 4], Player::Red, &w), 0);
    }

    #[test]
    fn test_custom_weights() {
        let board = board_from_drops(&[
            (0, Player::Red),
            (6, Player::Yellow),
            (1, Player::Red),
        ]);

        let heavy = EvalWeights {
            open_two: 100,
            ..EvalWeights::default()
        };

        assert!(
            evaluate_with(&board, Player::Red, &heavy) > evaluate(&board, Player::Red)
        );
    }
}
