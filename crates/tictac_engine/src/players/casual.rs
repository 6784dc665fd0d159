//! Casual tier: random play with a mild preference for strong squares.

use super::pick;
use crate::rules::empty_cells;
use crate::{Board, Position};
use rand::Rng;
use tracing::{debug, instrument};

/// Chance of restricting the pick to the center and corners.
pub const PREFERRED_CHANCE: f64 = 0.3;

/// Beatable player with no win or block awareness.
///
/// With probability [`PREFERRED_CHANCE`] it picks among the empty center and
/// corner squares; otherwise, or when none of those are empty, it picks
/// among all empty squares.
#[derive(Debug, Clone, Copy, Default)]
pub struct CasualPlayer;

impl CasualPlayer {
    /// Creates a casual player.
    pub fn new() -> Self {
        Self
    }

    /// Picks a square, or `None` on a full board.
    #[instrument(skip(self, board, rng))]
    pub fn choose<R: Rng>(&self, board: &Board, rng: &mut R) -> Option<Position> {
        let empty = empty_cells(board);

        if rng.random_bool(PREFERRED_CHANCE) {
            let preferred: Vec<Position> = empty
                .iter()
                .copied()
                .filter(|pos| *pos == Position::Center || pos.is_corner())
                .collect();
            if let Some(pos) = pick(rng, &preferred) {
                debug!(position = %pos, "Casual picked a preferred square");
                return Some(pos);
            }
        }

        let pos = pick(rng, &empty)?;
        debug!(position = %pos, "Casual picked any square");
        Some(pos)
    }
}
