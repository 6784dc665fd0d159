//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]: win detection, draw detection and the
//! empty-square scan every player iterates in. None of them mutate the board.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, completing_cell, has_won, threat_count, winner};

use crate::{Board, GameStatus, Position};
use tracing::instrument;

/// Empty squares in ascending index order.
///
/// This order is the tie-break order for every player.
pub fn empty_cells(board: &Board) -> Vec<Position> {
    Position::ALL
        .into_iter()
        .filter(|pos| board.is_empty(*pos))
        .collect()
}

/// Evaluates the status of a round. A win is checked before a draw.
#[instrument]
pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(mark) => GameStatus::Won(mark),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
