//! The Connect Four board.
//!
//! A fixed 6×7 grid with gravity: pieces dropped into a column land on the
//! lowest empty row. Row 0 is the top of the board, row 5 the bottom.
//!
//! The board is `Copy` (42 cells plus a few counters), so search code clones
//! it freely; minimax instead mutates one board with [`Board::drop_piece`] /
//! [`Board::undo`] in strict stack discipline.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::MoveError;
use super::player::Player;

/// Number of rows (row 0 is the top).
pub const ROWS: usize = 6;

/// Number of columns.
pub const COLS: usize = 7;

/// How many in a line wins.
const CONNECT: usize = 4;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
}

/// Connect Four board state.
///
/// Tracks the grid, the side to move, the move count, and the last move
/// played. `last_move` is a rendering hint; it is cleared by [`Board::undo`]
/// and excluded from equality.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Player>; COLS]; ROWS],
    to_move: Player,
    moves_played: u8,
    last_move: Option<(usize, usize)>,
}

impl Board {
    /// Create an empty board with Red to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [[None; COLS]; ROWS],
            to_move: Player::Red,
            moves_played: 0,
            last_move: None,
        }
    }

    /// Read a cell. Row 0 is the top, row 5 the bottom.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[inline]
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[row][col]
    }

    /// The player whose turn it is.
    #[inline]
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Total pieces on the board.
    #[inline]
    #[must_use]
    pub fn moves_played(&self) -> u8 {
        self.moves_played
    }

    /// The `(row, col)` of the most recently dropped piece, if known.
    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// True iff `col` is in range and its top cell is empty.
    #[must_use]
    pub fn is_valid_move(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col].is_none()
    }

    /// Columns with at least one empty slot, in ascending order.
    #[must_use]
    pub fn legal_moves(&self) -> SmallVec<[usize; COLS]> {
        (0..COLS).filter(|&c| self.is_valid_move(c)).collect()
    }

    /// Drop a piece for `player` into `col`, returning the landing row.
    ///
    /// Advances the side to move to `player.opponent()`.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::OutOfRange { column: col });
        }

        for row in (0..ROWS).rev() {
            if self.cells[row][col].is_none() {
                self.cells[row][col] = Some(player);
                self.to_move = player.opponent();
                self.moves_played += 1;
                self.last_move = Some((row, col));
                return Ok(row);
            }
        }

        Err(MoveError::ColumnFull { column: col })
    }

    /// Remove the top piece of `col`, returning the player it belonged to.
    ///
    /// Restores the side to move to the removed player. Callers must undo in
    /// exact reverse order of their drops (stack discipline); out-of-order
    /// undo produces a board no real game could reach.
    pub fn undo(&mut self, col: usize) -> Result<Player, MoveError> {
        if col >= COLS {
            return Err(MoveError::OutOfRange { column: col });
        }

        for row in 0..ROWS {
            if let Some(player) = self.cells[row][col] {
                self.cells[row][col] = None;
                self.to_move = player;
                self.moves_played -= 1;
                self.last_move = None;
                return Ok(player);
            }
        }

        Err(MoveError::ColumnEmpty { column: col })
    }

    /// Scan the whole board for four in a line along any orientation.
    #[must_use]
    pub fn check_winner(&self) -> Option<Player> {
        // Horizontal
        for row in 0..ROWS {
            for col in 0..=COLS - CONNECT {
                if let Some(p) = self.cells[row][col] {
                    if (1..CONNECT).all(|i| self.cells[row][col + i] == Some(p)) {
                        return Some(p);
                    }
                }
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..=ROWS - CONNECT {
                if let Some(p) = self.cells[row][col] {
                    if (1..CONNECT).all(|i| self.cells[row + i][col] == Some(p)) {
                        return Some(p);
                    }
                }
            }
        }

        // Diagonal ↘ (down-right)
        for row in 0..=ROWS - CONNECT {
            for col in 0..=COLS - CONNECT {
                if let Some(p) = self.cells[row][col] {
                    if (1..CONNECT).all(|i| self.cells[row + i][col + i] == Some(p)) {
                        return Some(p);
                    }
                }
            }
        }

        // Diagonal ↗ (up-right)
        for row in CONNECT - 1..ROWS {
            for col in 0..=COLS - CONNECT {
                if let Some(p) = self.cells[row][col] {
                    if (1..CONNECT).all(|i| self.cells[row - i][col + i] == Some(p)) {
                        return Some(p);
                    }
                }
            }
        }

        None
    }

    /// Check only the four lines through `(row, col)` for a win.
    ///
    /// Equivalent to [`Board::check_winner`] restricted to the last-played
    /// cell; the search hot path uses this after every drop.
    #[must_use]
    pub fn win_at(&self, row: usize, col: usize) -> bool {
        let Some(player) = self.cells[row][col] else {
            return false;
        };

        // (dr, dc) direction pairs: horizontal, vertical, both diagonals.
        const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

        for (dr, dc) in DIRECTIONS {
            let mut count = 1;
            count += self.run_length(row, col, dr, dc, player);
            count += self.run_length(row, col, -dr, -dc, player);
            if count >= CONNECT {
                return true;
            }
        }

        false
    }

    /// Count same-player cells walking from `(row, col)` in one direction,
    /// excluding the start cell.
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, player: Player) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;

        while (0..ROWS as isize).contains(&r)
            && (0..COLS as isize).contains(&c)
            && self.cells[r as usize][c as usize] == Some(player)
        {
            count += 1;
            r += dr;
            c += dc;
        }

        count
    }

    /// True iff every column is full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.moves_played as usize == ROWS * COLS
    }

    /// True iff a winner exists or the board is full.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// The game result, if the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(winner) = self.check_winner() {
            Some(Outcome::Win(winner))
        } else if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

// `last_move` is a rendering hint and deliberately excluded from equality:
// drop followed by undo restores an equal board.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
            && self.to_move == other.to_move
            && self.moves_played == other.moves_played
    }
}

impl Eq for Board {}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            write!(f, "|")?;
            for cell in row {
                match cell {
                    Some(p) => write!(f, "{}|", p.symbol())?,
                    None => write!(f, " |")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", "-".repeat(COLS * 2 + 1))?;
        write!(f, " ")?;
        for col in 0..COLS {
            write!(f, "{col} ")?;
        }
        Ok(())
    }
}
