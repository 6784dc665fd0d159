//! Computer players.
//!
//! Each player is a pure function of a board snapshot (plus an injected
//! randomness source where the tier uses one). Lookahead works on private
//! copies of the board, so the caller's board is never touched.

mod casual;
mod heuristic;
mod search;

pub use casual::CasualPlayer;
pub use heuristic::{HeuristicPlayer, Rule};
pub use search::SearchPlayer;

use crate::Position;
use rand::Rng;

/// Uniformly random pick from `pool`, or `None` if it is empty.
pub(crate) fn pick<R: Rng>(rng: &mut R, pool: &[Position]) -> Option<Position> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.random_range(0..pool.len())])
}
