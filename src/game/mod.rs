//! Board model: grid state, move legality, win/draw detection.

pub mod board;
pub mod player;

pub use board::{Board, Outcome, COLS, ROWS};
pub use player::Player;
